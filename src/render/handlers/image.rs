use crate::render::RenderNode;
use crate::render::ops::Attributes;

/// Width and height of article cover images.
const COVER_SIZE: (u64, u64) = (690, 320);

/// Renders an image insert. Dimensions are advisory and passed through.
pub(crate) fn render(src: &str, attributes: &Attributes) -> RenderNode {
  let cover = matches!(
    (attributes.width, attributes.height),
    (Some(w), Some(h)) if (w, h) == COVER_SIZE
  );

  RenderNode::Image {
    src: src.to_string(),
    width: attributes.width,
    height: attributes.height,
    cover,
  }
}
