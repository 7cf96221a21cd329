//! Rendering many posts at once.
//!
//! Posts are loaded through a [`PostSource`] with bounded concurrency. Each
//! post succeeds or fails on its own; one bad post never stops the batch.

use anyhow::{Context, Result};
use futures::stream::{self, StreamExt};
use tracing::{debug, warn};

use crate::mys::{LoadedPost, PostSource};
use crate::render::{RenderNode, RenderOptions, render_post};

/// Result of rendering one post of a batch.
#[derive(Debug)]
pub struct RenderedPost {
  /// Reference the post was loaded from.
  pub reference: String,
  /// Post title, when the payload carried one.
  pub subject: Option<String>,
  pub outcome: Result<Vec<RenderNode>>,
}

impl RenderedPost {
  pub fn is_ok(&self) -> bool {
    self.outcome.is_ok()
  }
}

/// Load and render every reference, at most `parallel` at a time.
///
/// # Arguments
/// * `source` - Where posts are loaded from.
/// * `references` - Post references, e.g. file paths.
/// * `options` - Rendering options shared by all posts.
/// * `parallel` - Maximum number of posts loaded concurrently (at least 1).
///
/// # Returns
/// One entry per reference, in input order.
pub async fn render_batch(
  source: &dyn PostSource,
  references: &[String],
  options: &RenderOptions,
  parallel: usize,
) -> Vec<RenderedPost> {
  let parallel = parallel.max(1);
  debug!("Rendering {} posts with up to {parallel} in flight", references.len());

  stream::iter(references)
    .map(|reference| render_one(source, reference, options))
    .buffered(parallel)
    .collect()
    .await
}

async fn render_one(source: &dyn PostSource, reference: &str, options: &RenderOptions) -> RenderedPost {
  let loaded = source.load_post(reference).await;

  let subject = loaded.as_ref().ok().and_then(|post| post.subject.clone());
  let outcome = loaded.and_then(|post: LoadedPost| {
    render_post(&post.content, options).with_context(|| format!("Could not render {reference}"))
  });

  if let Err(e) = &outcome {
    warn!("{e:#}");
  }

  RenderedPost {
    reference: reference.to_string(),
    subject,
    outcome,
  }
}
