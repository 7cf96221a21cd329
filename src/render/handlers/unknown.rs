use serde_json::Value;
use tracing::debug;

use crate::render::RenderNode;

/// Wraps an operation the renderer cannot interpret.
///
/// This is the fallback for every unrecognized shape and never fails.
pub(crate) fn render(raw: &Value) -> RenderNode {
  debug!("Unknown operation kept for diagnostics: {raw}");
  RenderNode::Unknown { raw: raw.clone() }
}
