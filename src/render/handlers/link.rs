use crate::error::Result;
use crate::mys::url::classify;
use crate::render::node::{Icon, Link};

/// Builds a link with the decorative `link` icon.
///
/// Internal article URLs are rewritten to the in-app post route; everything
/// else is kept verbatim and opened externally.
///
/// # Arguments
/// * `label` - Text shown to the reader.
/// * `href` - URL as written by the post author.
pub(crate) fn build(label: &str, href: &str) -> Result<Link> {
  let destination = classify(href)?;

  Ok(Link {
    href: destination.href,
    target: destination.target,
    label: label.to_string(),
    icon: Some(Icon::Link),
  })
}
