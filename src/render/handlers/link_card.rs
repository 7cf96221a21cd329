use super::link;
use crate::error::Result;
use crate::render::RenderNode;
use crate::render::ops::LinkCard;

/// Button label used when the card does not provide one.
pub const DEFAULT_BUTTON_TEXT: &str = "详情";

/// Renders a link card with its action button.
///
/// The title is trusted markup from the upstream authoring pipeline and is
/// passed through unescaped.
pub(crate) fn render(card: &LinkCard) -> Result<RenderNode> {
  let label = card
    .button_text
    .as_deref()
    .filter(|text| !text.is_empty())
    .unwrap_or(DEFAULT_BUTTON_TEXT);

  Ok(RenderNode::Card {
    cover: card.cover.clone(),
    title_markup: card.title.clone(),
    price: card.price.clone().filter(|price| !price.is_empty()),
    action: link::build(label, &card.origin_url)?,
  })
}
