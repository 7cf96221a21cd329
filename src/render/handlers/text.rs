use tracing::debug;

use super::link;
use crate::contrast::{HexColor, colors_too_similar};
use crate::error::Result;
use crate::render::RenderNode;
use crate::render::ops::Attributes;
use crate::theme::Palette;

/// Renders a text insert, or a link when the text carries a `link` attribute.
///
/// # Errors
/// Fails when the author color is not a `#rrggbb` string, or when a link
/// attribute cannot be classified.
pub(crate) fn render(text: &str, attributes: &Attributes, palette: &Palette) -> Result<RenderNode> {
  if let Some(href) = &attributes.link {
    return link::build(text, href).map(RenderNode::Link);
  }

  let color = attributes
    .color
    .as_deref()
    .map(|color| readable_color(color, palette))
    .transpose()?;

  Ok(RenderNode::Text {
    content: text.to_string(),
    bold: attributes.bold,
    color,
  })
}

/// Keeps the author color unless it vanishes against one of the palette's
/// backgrounds.
fn readable_color(color: &str, palette: &Palette) -> Result<String> {
  let foreground: HexColor = color.parse()?;

  if palette
    .backgrounds
    .iter()
    .any(|background| colors_too_similar(*background, foreground))
  {
    debug!("Text color {color} is too close to a background, using {}", palette.default_text);
    return Ok(palette.default_text.to_string());
  }

  Ok(color.to_string())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::RenderError;
  use crate::mys::url::LinkTarget;
  use crate::theme::{LIGHT_TEXT, Theme};

  fn attributes() -> Attributes {
    Attributes::default()
  }

  #[test]
  fn test_plain_text() {
    let node = render("hello", &attributes(), &Palette::default()).unwrap();
    assert_eq!(
      node,
      RenderNode::Text {
        content: "hello".to_string(),
        bold: false,
        color: None
      }
    );
  }

  #[test]
  fn test_bold_and_readable_color_are_kept() {
    let attrs = Attributes {
      bold: true,
      color: Some("#d63c3c".to_string()),
      ..attributes()
    };
    let node = render("warning", &attrs, &Palette::default()).unwrap();
    assert_eq!(
      node,
      RenderNode::Text {
        content: "warning".to_string(),
        bold: true,
        color: Some("#d63c3c".to_string())
      }
    );
  }

  #[test]
  fn test_color_matching_light_background_is_replaced() {
    let attrs = Attributes {
      color: Some("#ece5d8".to_string()),
      ..attributes()
    };
    let node = render("ghost", &attrs, &Palette::for_theme(Theme::Light)).unwrap();
    let RenderNode::Text { color, .. } = node else {
      panic!("expected text");
    };
    assert_eq!(color, Some(LIGHT_TEXT.to_string()));
  }

  #[test]
  fn test_color_matching_dark_background_is_replaced() {
    let attrs = Attributes {
      color: Some("#000000".to_string()),
      ..attributes()
    };
    let palette = Palette::for_theme(Theme::Dark);
    let node = render("ghost", &attrs, &palette).unwrap();
    let RenderNode::Text { color, .. } = node else {
      panic!("expected text");
    };
    assert_eq!(color, Some(palette.default_text.to_string()));
  }

  #[test]
  fn test_invalid_color_fails() {
    let attrs = Attributes {
      color: Some("#fff".to_string()),
      ..attributes()
    };
    let err = render("x", &attrs, &Palette::default()).unwrap_err();
    assert!(matches!(err, RenderError::InvalidColor { .. }));
  }

  #[test]
  fn test_link_attribute_produces_link() {
    let attrs = Attributes {
      bold: true,
      link: Some("https://www.miyoushe.com/ys/article/42".to_string()),
      ..attributes()
    };
    let RenderNode::Link(link) = render("see here", &attrs, &Palette::default()).unwrap() else {
      panic!("expected link");
    };
    assert_eq!(link.label, "see here");
    assert_eq!(link.href, "/post_detail/42");
    assert_eq!(link.target, LinkTarget::Internal);
  }
}
