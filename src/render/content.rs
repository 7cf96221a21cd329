//! Choosing where a post's operation list comes from.
//!
//! Posts carry two content fields. Article posts store legacy HTML in
//! `content` and the real document in `structured_content`; picture posts
//! store a small `{describe, imgs}` object in `content` that is turned into
//! operations here.

use serde_json::{Map, Value, json};
use tracing::debug;

use crate::mys::PostContent;

/// The operation list a post will be rendered from.
#[derive(Debug, Clone, PartialEq)]
pub enum OperationSource<'a> {
  /// JSON text from `structured_content`, not parsed yet.
  Structured(&'a str),
  /// Operations built from a `{describe, imgs}` content object.
  Synthesized(Vec<Value>),
}

/// Decide which operation list to render for `post`.
///
/// Content starting with `<` is legacy markup and is ignored. Otherwise the
/// content is read as a `{describe, imgs}` object; if that fails the
/// structured content is used.
pub fn resolve_source(post: &PostContent) -> OperationSource<'_> {
  if post.content.trim_start().starts_with('<') {
    debug!("Content is legacy markup, using structured content");
    return OperationSource::Structured(&post.structured_content);
  }

  match synthesize_operations(&post.content) {
    Some(operations) => {
      debug!("Synthesized {} operations from simple content", operations.len());
      OperationSource::Synthesized(operations)
    }
    None => {
      debug!("Content is not a simple object, using structured content");
      OperationSource::Structured(&post.structured_content)
    }
  }
}

/// Build operations from a `{describe, imgs, ...}` content object.
///
/// Keys are visited in the order they appear in `content`. `describe`
/// becomes one text operation and each `imgs` entry one image operation.
/// Any other key becomes a text operation holding its JSON-encoded value. Returns `None` when `content` does not have this shape.
pub fn synthesize_operations(content: &str) -> Option<Vec<Value>> {
  let fields: Map<String, Value> = serde_json::from_str(content).ok()?;
  let mut operations = Vec::with_capacity(fields.len());

  for (key, value) in &fields {
    match key.as_str() {
      "describe" => operations.push(json!({ "insert": text_of(value) })),
      "imgs" => {
        for image in value.as_array()? {
          operations.push(json!({ "insert": { "image": image.as_str()? } }));
        }
      }
      _ => operations.push(json!({ "insert": value.to_string() })),
    }
  }

  Some(operations)
}

fn text_of(value: &Value) -> String {
  match value {
    Value::String(text) => text.clone(),
    other => other.to_string(),
  }
}
