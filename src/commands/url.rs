//! `url` subcommand: show how a link found in post content is routed.

use std::process;

use crate::color::ColorScheme;
use crate::mys::{LinkTarget, classify};

/// Print the route and target a URL resolves to.
///
/// Exits with status 1 when an internal post URL has no usable id.
pub(crate) fn handle_url_command(url: &str, colors: &ColorScheme) {
  match classify(url.trim()) {
    Ok(destination) => {
      let target = match destination.target {
        LinkTarget::Internal => colors.success("internal"),
        LinkTarget::External => colors.warning("external"),
      };
      println!("{}: {}", colors.emphasis("URL"), colors.link(url.trim()));
      println!("{}: {}", colors.emphasis("Target"), target);
      println!("{}: {}", colors.emphasis("Route"), colors.link(&destination.href));
    }
    Err(error) => {
      eprintln!("{} {}", colors.error("✗"), colors.error("Could not classify URL"));
      eprintln!("  {}: {}", colors.emphasis("Error"), error);
      process::exit(1);
    }
  }
}
