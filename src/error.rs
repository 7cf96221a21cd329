//! Error types for the rendering engine.
//!
//! Every failure the engine can report is a [`RenderError`] variant. Inputs the
//! engine merely does not recognize are not errors: they render as
//! [`RenderNode::Unknown`](crate::render::RenderNode::Unknown).

use thiserror::Error;

/// Convenience alias used throughout the engine.
pub type Result<T> = std::result::Result<T, RenderError>;

/// Failure modes of the structured-content renderer.
#[derive(Debug, Error)]
pub enum RenderError {
  /// An operation claimed a variant but its payload is missing or malformed.
  #[error("malformed `{variant}` operation: {reason}")]
  ContractViolation { variant: &'static str, reason: String },

  /// A color was not a strict `#rrggbb` hex string.
  #[error("invalid hex color `{value}` (expected #rrggbb)")]
  InvalidColor { value: String },

  /// A URL could not be parsed or has no usable path.
  #[error("invalid URL `{url}`: {reason}")]
  InvalidUrl { url: String, reason: String },

  /// The operation list itself is not valid JSON.
  #[error("post content could not be rendered: {0}")]
  MalformedDocument(#[from] serde_json::Error),

  /// Fold sections are nested deeper than the configured limit.
  #[error("fold sections nested deeper than {limit} levels")]
  NestingTooDeep { limit: usize },
}

impl RenderError {
  pub(crate) fn contract(variant: &'static str, reason: impl Into<String>) -> Self {
    RenderError::ContractViolation {
      variant,
      reason: reason.into(),
    }
  }

  /// Returns `true` for errors that invalidate the whole document rather than
  /// a single operation.
  pub fn is_fatal(&self) -> bool {
    matches!(self, RenderError::MalformedDocument(_))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_contract_violation_message() {
    let err = RenderError::contract("vod", "no resolutions");
    assert_eq!(err.to_string(), "malformed `vod` operation: no resolutions");
    assert!(!err.is_fatal());
  }

  #[test]
  fn test_malformed_document_is_fatal() {
    let json_err = serde_json::from_str::<Vec<serde_json::Value>>("not json").unwrap_err();
    let err = RenderError::from(json_err);
    assert!(err.is_fatal());
    assert!(err.to_string().starts_with("post content could not be rendered"));
  }
}
