//! Data transfer objects for BBS post payloads.
//!
//! Only the fields the renderer consumes are modeled; everything else in the
//! upstream payload is ignored during deserialization.

use serde::{Deserialize, Serialize};

/// The two content fields a post is rendered from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostContent {
  /// Either legacy HTML (starting with `<`) or a JSON-encoded
  /// `{describe, imgs}` object.
  #[serde(default)]
  pub content: String,
  /// Canonical JSON-encoded operation list.
  #[serde(default)]
  pub structured_content: String,
}

impl PostContent {
  pub fn new(content: impl Into<String>, structured_content: impl Into<String>) -> Self {
    Self {
      content: content.into(),
      structured_content: structured_content.into(),
    }
  }
}

/// Post record as returned inside `getPostFull`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
  /// Numeric post id encoded as a string.
  #[serde(default)]
  pub post_id: String,
  /// Post title.
  #[serde(default)]
  pub subject: String,
  pub content: String,
  #[serde(default)]
  pub structured_content: String,
}

impl From<Post> for PostContent {
  fn from(post: Post) -> Self {
    PostContent {
      content: post.content,
      structured_content: post.structured_content,
    }
  }
}

/// `data.post` object of a `getPostFull` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullData {
  pub post: Post,
}

/// `data` object of a `getPostFull` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostData {
  pub post: FullData,
}

/// Complete `getPostFull` response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
  /// Zero on success.
  pub retcode: i64,
  #[serde(default)]
  pub message: String,
  pub data: Option<PostData>,
}
