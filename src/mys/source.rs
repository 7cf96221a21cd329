//! Sources of post records.
//!
//! The renderer never talks to the network. Posts are read from files or
//! stdin by [`FileSource`]; tests substitute their own [`PostSource`].

use anyhow::{Context, Result, anyhow, bail};
use async_trait::async_trait;
use serde_json::Value;
use tokio::io::AsyncReadExt;
use tracing::debug;

use super::models::{FullData, Post, PostContent, PostResponse};

/// Reference that makes [`FileSource`] read stdin.
pub const STDIN_REFERENCE: &str = "-";

/// A post ready to be rendered, plus what is known about it.
#[derive(Debug, Clone)]
pub struct LoadedPost {
  /// Post id when the payload carried one.
  pub post_id: Option<String>,
  /// Post title when the payload carried one.
  pub subject: Option<String>,
  pub content: PostContent,
}

/// Trait for loading posts by reference (enables testing with fake sources).
#[async_trait]
pub trait PostSource: Send + Sync {
  /// Load one post.
  ///
  /// # Arguments
  /// * `reference` - Source-specific identifier, e.g. a file path.
  async fn load_post(&self, reference: &str) -> Result<LoadedPost>;
}

/// Reads post payloads from the filesystem, or stdin for `-`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSource;

#[async_trait]
impl PostSource for FileSource {
  async fn load_post(&self, reference: &str) -> Result<LoadedPost> {
    let text = if reference == STDIN_REFERENCE {
      let mut buffer = String::new();
      tokio::io::stdin()
        .read_to_string(&mut buffer)
        .await
        .context("Failed to read post from stdin")?;
      buffer
    } else {
      tokio::fs::read_to_string(reference)
        .await
        .with_context(|| format!("Failed to read post file {reference}"))?
    };

    debug!("Loaded {reference} ({} bytes)", text.len());
    parse_post_document(&text).with_context(|| format!("Unrecognized post payload in {reference}"))
  }
}

/// Parse any of the accepted post payload shapes.
///
/// Accepted, from outermost to innermost:
/// - the full `getPostFull` response (`{retcode, message, data: {post: {post}}}`)
/// - the `data.post` object (`{post: {...}}`)
/// - a post record or bare `{content, structured_content}` object
///
/// # Errors
/// Fails on invalid JSON, an unrecognized shape, or a response whose `retcode`
/// is non-zero.
pub fn parse_post_document(text: &str) -> Result<LoadedPost> {
  let value: Value = serde_json::from_str(text).context("Post payload is not valid JSON")?;

  let post: Post = if value.get("retcode").is_some() {
    let response: PostResponse = serde_json::from_value(value).context("Malformed API response")?;
    if response.retcode != 0 {
      bail!("API returned retcode {}: {}", response.retcode, response.message);
    }
    response
      .data
      .ok_or_else(|| anyhow!("API response has no data"))?
      .post
      .post
  } else if value.get("post").is_some_and(Value::is_object) {
    serde_json::from_value::<FullData>(value).context("Malformed post data")?.post
  } else if value.get("content").is_some() {
    serde_json::from_value(value).context("Malformed post record")?
  } else {
    bail!("expected a post record with `content` and `structured_content`");
  };

  Ok(LoadedPost {
    post_id: Some(post.post_id.clone()).filter(|id| !id.is_empty()),
    subject: Some(post.subject.clone()).filter(|s| !s.is_empty()),
    content: post.into(),
  })
}
