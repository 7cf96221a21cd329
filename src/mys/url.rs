//! Helpers for classifying BBS URLs and building in-app routes.

use serde::Serialize;
use url::Url;

use crate::error::{RenderError, Result};

/// Hosts whose article pages are opened inside the app.
const INTERNAL_HOSTS: &[&str] = &["bbs.mihoyo.com", "www.miyoushe.com"];

/// Where a link should be opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkTarget {
  /// Routed inside the app.
  Internal,
  /// Opened in an external browser window.
  External,
}

impl LinkTarget {
  pub fn name(&self) -> &'static str {
    match self {
      LinkTarget::Internal => "internal",
      LinkTarget::External => "external",
    }
  }
}

/// Resolved navigation target for a URL found in post content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkDestination {
  /// In-app route for internal posts, or the original URL.
  pub href: String,
  pub target: LinkTarget,
}

/// Returns `true` when `url` points at a BBS article that the app can show
/// itself.
///
/// Accepted shapes:
/// - https://bbs.mihoyo.com/ys/article/540893019
/// - https://www.miyoushe.com/sr/article/12345
///
/// Exactly one word segment must precede `article`, the id must be numeric,
/// and nothing (query, fragment, extra segments) may follow.
pub fn is_internal_post(url: &str) -> bool {
  let Ok(parsed) = Url::parse(url) else {
    return false;
  };

  if parsed.scheme() != "https" || parsed.port().is_some() || !parsed.username().is_empty() {
    return false;
  }

  if !parsed.host_str().is_some_and(|host| INTERNAL_HOSTS.contains(&host)) {
    return false;
  }

  if parsed.query().is_some() || parsed.fragment().is_some() {
    return false;
  }

  let Some(segments) = parsed.path_segments() else {
    return false;
  };

  match segments.collect::<Vec<_>>().as_slice() {
    [section, "article", id] => {
      !section.is_empty()
        && section.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !id.is_empty()
        && id.chars().all(|c| c.is_ascii_digit())
    }
    _ => false,
  }
}

/// Extract the post identifier (the final path segment) from a URL.
///
/// # Errors
/// Returns [`RenderError::InvalidUrl`] when the URL cannot be parsed or has no
/// non-empty path segment.
pub fn extract_post_id(url: &str) -> Result<String> {
  let invalid = |reason: &str| RenderError::InvalidUrl {
    url: url.to_string(),
    reason: reason.to_string(),
  };

  let parsed = Url::parse(url).map_err(|e| invalid(&e.to_string()))?;

  parsed
    .path_segments()
    .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
    .map(str::to_string)
    .ok_or_else(|| invalid("URL has no path segments"))
}

/// Classify a URL into an in-app route or an external link.
///
/// # Errors
/// Only internal post URLs can fail, and only if their id cannot be extracted.
pub fn classify(url: &str) -> Result<LinkDestination> {
  if is_internal_post(url) {
    let post_id = extract_post_id(url)?;
    return Ok(LinkDestination {
      href: post_detail_route(&post_id),
      target: LinkTarget::Internal,
    });
  }

  Ok(LinkDestination {
    href: url.to_string(),
    target: LinkTarget::External,
  })
}

/// In-app route of a post detail page.
pub fn post_detail_route(post_id: &str) -> String {
  format!("/post_detail/{post_id}")
}

/// In-app route of a lottery detail page.
pub fn lottery_route(lottery_id: &str) -> String {
  format!("/lottery/{lottery_id}")
}

/// Public profile page of a BBS user.
pub fn user_profile_url(uid: &str) -> String {
  format!("https://www.miyoushe.com/ys/accountCenter/postList?id={uid}")
}
