use tracing::debug;

use crate::error::Result;
use crate::mys::url::{LinkTarget, lottery_route};
use crate::render::dispatch::{RenderContext, render_operations};
use crate::render::node::{Icon, Link};
use crate::render::ops::{Fold, Lottery};
use crate::render::{RenderNode, parse_operation_list};

/// Renders a fold as a disclosure whose summary and body are documents of
/// their own.
///
/// # Errors
/// Fails when the nesting limit is reached, when either section is not a JSON
/// operation list, or when an operation inside a section fails.
pub(crate) fn render(fold: &Fold, ctx: &RenderContext<'_>) -> Result<RenderNode> {
  let nested = ctx.nested()?;
  debug!("Rendering fold at depth {}", nested.depth());

  Ok(RenderNode::Disclosure {
    summary: render_section(&fold.title, &nested)?,
    body: render_section(&fold.content, &nested)?,
  })
}

/// A blank section renders as nothing instead of failing to parse.
fn render_section(section: &str, ctx: &RenderContext<'_>) -> Result<Vec<RenderNode>> {
  if section.trim().is_empty() {
    return Ok(Vec::new());
  }

  let operations = parse_operation_list(section)?;
  render_operations(&operations, ctx)
}

/// Renders a lottery marker as an in-app link to the lottery page.
pub(crate) fn render_lottery(lottery: &Lottery) -> RenderNode {
  RenderNode::Link(Link {
    href: lottery_route(&lottery.id),
    target: LinkTarget::Internal,
    label: lottery.toast.clone(),
    icon: Some(Icon::Gift),
  })
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;
  use crate::error::RenderError;
  use crate::render::{FailurePolicy, RenderOptions};

  fn fold(title: serde_json::Value, content: serde_json::Value) -> Fold {
    Fold {
      title: title.to_string(),
      content: content.to_string(),
    }
  }

  #[test]
  fn test_fold_renders_both_sections() {
    let options = RenderOptions::default();
    let ctx = RenderContext::new(&options);
    let fold = fold(
      json!([{"insert": "Spoilers"}]),
      json!([{"insert": {"image": "https://example.com/a.png"}}]),
    );

    let RenderNode::Disclosure { summary, body } = render(&fold, &ctx).unwrap() else {
      panic!("expected disclosure");
    };
    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0].kind(), "text");
    assert_eq!(body.len(), 1);
    assert_eq!(body[0].kind(), "image");
  }

  #[test]
  fn test_blank_sections_are_empty() {
    let options = RenderOptions::default();
    let ctx = RenderContext::new(&options);
    let fold = Fold {
      title: String::new(),
      content: "  ".to_string(),
    };

    let RenderNode::Disclosure { summary, body } = render(&fold, &ctx).unwrap() else {
      panic!("expected disclosure");
    };
    assert!(summary.is_empty());
    assert!(body.is_empty());
  }

  #[test]
  fn test_malformed_section_fails() {
    let options = RenderOptions::default();
    let ctx = RenderContext::new(&options);
    let fold = Fold {
      title: "[]".to_string(),
      content: "{not json".to_string(),
    };
    assert!(matches!(render(&fold, &ctx), Err(RenderError::MalformedDocument(_))));
  }

  #[test]
  fn test_depth_limit() {
    let options = RenderOptions {
      max_depth: 0,
      failure_policy: FailurePolicy::Isolate,
      ..RenderOptions::default()
    };
    let ctx = RenderContext::new(&options);
    let err = render(&fold(json!([]), json!([])), &ctx).unwrap_err();
    assert!(matches!(err, RenderError::NestingTooDeep { limit: 0 }));
  }

  #[test]
  fn test_lottery_link() {
    let lottery = Lottery {
      id: "8848".to_string(),
      toast: "Join the giveaway".to_string(),
    };
    let RenderNode::Link(link) = render_lottery(&lottery) else {
      panic!("expected link");
    };
    assert_eq!(link.href, "/lottery/8848");
    assert_eq!(link.label, "Join the giveaway");
    assert_eq!(link.icon, Some(Icon::Gift));
    assert_eq!(link.target, LinkTarget::Internal);
  }
}
