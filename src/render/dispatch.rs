//! Routes classified operations to their handlers.

use serde_json::Value;
use tracing::{trace, warn};

use super::handlers::{divider, fold, image, link_card, mention, text, unknown, video};
use super::ops::{Insert, Operation};
use super::{FailurePolicy, RenderNode, RenderOptions};
use crate::error::{RenderError, Result};

/// Options plus the current fold nesting depth.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RenderContext<'a> {
  options: &'a RenderOptions,
  depth: usize,
}

impl<'a> RenderContext<'a> {
  pub(crate) fn new(options: &'a RenderOptions) -> Self {
    Self { options, depth: 0 }
  }

  pub(crate) fn depth(&self) -> usize {
    self.depth
  }

  /// Context for a document nested one fold deeper.
  ///
  /// # Errors
  /// Returns [`RenderError::NestingTooDeep`] past `options.max_depth`.
  pub(crate) fn nested(&self) -> Result<Self> {
    if self.depth >= self.options.max_depth {
      return Err(RenderError::NestingTooDeep {
        limit: self.options.max_depth,
      });
    }

    Ok(Self {
      options: self.options,
      depth: self.depth + 1,
    })
  }
}

/// Sends one classified operation to its handler.
pub(crate) fn dispatch(op: &Operation<'_>, ctx: &RenderContext<'_>) -> Result<RenderNode> {
  let options = ctx.options;

  match &op.insert {
    Insert::Text(content) => text::render(content, &op.attributes, &options.palette),
    Insert::Image(src) => Ok(image::render(src, &op.attributes)),
    Insert::HostedVideo(vod) => video::render_hosted(vod, options.video_policy),
    Insert::EmbeddedVideo(src) => Ok(video::render_embedded(src)),
    Insert::Lottery(lottery) => Ok(fold::render_lottery(lottery)),
    Insert::Fold(section) => fold::render(section, ctx),
    Insert::LinkCard(card) => link_card::render(card),
    Insert::Divider(tag) => Ok(divider::render(tag, op.raw)),
    Insert::Mention(who) => Ok(mention::render(who)),
    Insert::Unknown => Ok(unknown::render(op.raw)),
  }
}

/// Classifies and renders one raw operation, applying the failure policy.
pub(crate) fn render_operation(raw: &Value, ctx: &RenderContext<'_>) -> Result<RenderNode> {
  match Operation::parse(raw).and_then(|op| dispatch(&op, ctx)) {
    Ok(node) => Ok(node),
    Err(err) if ctx.options.failure_policy == FailurePolicy::Isolate => {
      warn!("Rendering operation as unknown after error: {err}");
      Ok(unknown::render(raw))
    }
    Err(err) => Err(err),
  }
}

/// Renders a list of operations in order.
///
/// Under [`FailurePolicy::Abort`] the first failing operation aborts the
/// whole list.
pub(crate) fn render_operations(operations: &[Value], ctx: &RenderContext<'_>) -> Result<Vec<RenderNode>> {
  trace!("Rendering {} operations at depth {}", operations.len(), ctx.depth);

  operations.iter().map(|raw| render_operation(raw, ctx)).collect()
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  fn render_all(operations: Value, options: &RenderOptions) -> Result<Vec<RenderNode>> {
    let operations = operations.as_array().cloned().unwrap_or_default();
    render_operations(&operations, &RenderContext::new(options))
  }

  #[test]
  fn test_dispatch_routes_every_variant() {
    let options = RenderOptions::default();
    let nodes = render_all(
      json!([
        {"insert": "plain"},
        {"insert": {"image": "i.png"}},
        {"insert": {"vod": {"cover": "c", "resolutions": [{"url": "v", "format": ".mp4", "size": 1}]}}},
        {"insert": {"video": "https://player.example/1"}},
        {"insert": {"backup_text": "[抽奖]", "lottery": {"id": "1", "toast": "t"}}},
        {"insert": {"backup_text": "[折叠]", "fold": {"title": "[]", "content": "[]"}}},
        {"insert": {"link_card": {"cover": "c", "title": "t", "origin_url": "https://example.com"}}},
        {"insert": {"divider": "line_1"}},
        {"insert": {"mention": {"uid": "1", "nickname": "n"}}},
        {"insert": {"sticker": "s"}}
      ]),
      &options,
    )
    .unwrap();

    let kinds: Vec<_> = nodes.iter().map(RenderNode::kind).collect();
    assert_eq!(
      kinds,
      [
        "text",
        "image",
        "video",
        "video",
        "link",
        "disclosure",
        "card",
        "divider",
        "link",
        "unknown"
      ]
    );
  }

  #[test]
  fn test_abort_policy_stops_at_first_failure() {
    let options = RenderOptions::default();
    let err = render_all(
      json!([
        {"insert": "before"},
        {"insert": {"vod": {"cover": "c", "resolutions": []}}},
        {"insert": "after"}
      ]),
      &options,
    )
    .unwrap_err();
    assert!(matches!(err, RenderError::ContractViolation { variant: "vod", .. }));
  }

  #[test]
  fn test_isolate_policy_degrades_failing_operation() {
    let options = RenderOptions {
      failure_policy: FailurePolicy::Isolate,
      ..RenderOptions::default()
    };
    let broken = json!({"insert": {"mention": {"nickname": "no uid"}}});
    let nodes = render_all(json!([{"insert": "before"}, broken.clone(), {"insert": "after"}]), &options).unwrap();

    assert_eq!(nodes.len(), 3);
    assert_eq!(nodes[0].kind(), "text");
    assert_eq!(nodes[1], RenderNode::Unknown { raw: broken });
    assert_eq!(nodes[2].kind(), "text");
  }

  #[test]
  fn test_nested_context_depth() {
    let options = RenderOptions {
      max_depth: 2,
      ..RenderOptions::default()
    };
    let root = RenderContext::new(&options);
    let first = root.nested().unwrap();
    let second = first.nested().unwrap();
    assert_eq!(second.depth(), 2);
    assert!(matches!(second.nested(), Err(RenderError::NestingTooDeep { limit: 2 })));
  }
}
