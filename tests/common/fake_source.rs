//! Fake post source for testing
//!
//! This module provides an in-memory [`PostSource`] that serves fixture
//! payloads without touching the filesystem.

use std::collections::HashMap;

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use mys_render::mys::{LoadedPost, PostSource, parse_post_document};

use crate::common::fixtures;

/// A fake source that returns predefined post payloads by reference
pub struct FakePostSource {
  payloads: HashMap<String, String>,
}

impl FakePostSource {
  /// Create a new fake source with no posts
  pub fn new() -> Self {
    Self {
      payloads: HashMap::new(),
    }
  }

  /// Create a fake source with the default sample posts
  pub fn with_sample_posts() -> Self {
    let mut source = Self::new();

    source.add_post_from_json("article", fixtures::sample_article_response());
    source.add_post_from_json("picture", fixtures::sample_picture_post());
    source.add_post_from_json("embeds", fixtures::sample_embeds_post());
    source.add_post_from_json("folds", fixtures::sample_nested_fold_post());
    source.add_post_from_json("broken", fixtures::sample_broken_post());

    source
  }

  /// Add a post from a JSON value
  pub fn add_post_from_json(&mut self, reference: &str, json: serde_json::Value) {
    self.payloads.insert(reference.to_string(), json.to_string());
  }

  /// Add a raw payload string, which may not be valid JSON
  #[allow(dead_code)]
  pub fn add_raw_payload(&mut self, reference: &str, payload: &str) {
    self.payloads.insert(reference.to_string(), payload.to_string());
  }
}

impl Default for FakePostSource {
  fn default() -> Self {
    Self::new()
  }
}

#[async_trait]
impl PostSource for FakePostSource {
  async fn load_post(&self, reference: &str) -> Result<LoadedPost> {
    let payload = self
      .payloads
      .get(reference)
      .ok_or_else(|| anyhow!("Post not found: {reference}"))?;
    parse_post_document(payload)
  }
}
