//! Structured post content rendering.
//!
//! This module turns the delta-like operation lists produced by the BBS
//! editor into a tree of [`RenderNode`]s.
//!
//! # Architecture
//!
//! The conversion is split into focused modules:
//! - [`content`] - choosing the operation source for a post
//! - [`ops`] - classifying raw JSON operations into typed variants
//! - `dispatch` - routing each operation to its handler
//! - `handlers` - one handler per operation variant
//! - [`node`] - the output node types
//!
//! # Example
//!
//! ```
//! use mys_render::mys::PostContent;
//! use mys_render::render::{RenderOptions, render_post};
//!
//! let post = PostContent::new(r#"{"describe":"hello","imgs":["a.png"]}"#, "");
//! let nodes = render_post(&post, &RenderOptions::default()).unwrap();
//! assert_eq!(nodes.len(), 2);
//! assert_eq!(nodes[0].kind(), "text");
//! assert_eq!(nodes[1].kind(), "image");
//! ```

use std::time::Instant;

use clap::ValueEnum;
use serde_json::Value;
use tracing::{debug, error, trace};

use crate::error::Result;
use crate::mys::PostContent;
use crate::theme::Palette;

pub mod content;
mod dispatch;
mod handlers;
pub mod node;
pub mod ops;

pub use content::{OperationSource, resolve_source, synthesize_operations};
pub use handlers::divider::{DIVIDER_ASSETS, divider_asset};
pub use handlers::link_card::DEFAULT_BUTTON_TEXT;
pub use node::{Icon, Link, RenderNode, VideoMime};
pub use ops::{Insert, LOTTERY_MARKER, Operation};

/// Fold nesting allowed by default.
pub const DEFAULT_MAX_DEPTH: usize = 8;

/// How hosted videos pick one of their renditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum VideoPolicy {
  /// Largest file wins; the first one on ties.
  #[default]
  LargestSize,
  /// "1080P", then "720P", then the first rendition.
  PreferDefinition,
}

/// What happens when a single operation fails to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
  /// The first failing operation fails the whole post.
  #[default]
  Abort,
  /// A failing operation is rendered as [`RenderNode::Unknown`].
  Isolate,
}

/// Options that control rendering behaviour.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
  /// Backgrounds and replacement color for the text contrast check.
  pub palette: Palette,
  /// Maximum fold nesting depth.
  pub max_depth: usize,
  pub video_policy: VideoPolicy,
  pub failure_policy: FailurePolicy,
}

impl Default for RenderOptions {
  fn default() -> Self {
    Self {
      palette: Palette::default(),
      max_depth: DEFAULT_MAX_DEPTH,
      video_policy: VideoPolicy::default(),
      failure_policy: FailurePolicy::default(),
    }
  }
}

/// Render a post into an ordered list of nodes.
///
/// # Arguments
///
/// * `post` - The post's `content` and `structured_content` fields.
/// * `options` - Rendering behaviour flags.
///
/// # Returns
///
/// The rendered nodes in document order.
///
/// # Errors
///
/// [`RenderError::MalformedDocument`](crate::error::RenderError::MalformedDocument)
/// when the chosen operation list is not valid JSON. Handler errors propagate
/// unless `options.failure_policy` is [`FailurePolicy::Isolate`].
pub fn render_post(post: &PostContent, options: &RenderOptions) -> Result<Vec<RenderNode>> {
  let start = Instant::now();

  let nodes = match resolve_source(post) {
    OperationSource::Structured(json) => render_document(json, options)?,
    OperationSource::Synthesized(operations) => {
      dispatch::render_operations(&operations, &dispatch::RenderContext::new(options))?
    }
  };

  debug!(
    "Rendered post into {count} nodes in {duration:?}",
    count = nodes.len(),
    duration = start.elapsed()
  );

  Ok(nodes)
}

/// Render a JSON-encoded operation list.
///
/// # Errors
///
/// Same as [`render_post`].
pub fn render_document(json: &str, options: &RenderOptions) -> Result<Vec<RenderNode>> {
  let operations = parse_operation_list(json)?;
  dispatch::render_operations(&operations, &dispatch::RenderContext::new(options))
}

/// Render a single raw operation at the top level.
pub fn render_operation(raw: &Value, options: &RenderOptions) -> Result<RenderNode> {
  dispatch::render_operation(raw, &dispatch::RenderContext::new(options))
}

pub(crate) fn parse_operation_list(json: &str) -> Result<Vec<Value>> {
  trace!(
    "Operation list (first 500 chars):\n{}",
    json.chars().take(500).collect::<String>()
  );

  serde_json::from_str(json).map_err(|e| {
    error!("Operation list parse error: {e}");
    e.into()
  })
}
