//! Presentation primitives produced by the renderer.

use serde::Serialize;
use serde_json::Value;

use crate::mys::url::LinkTarget;

/// Symbolic icon placed before a link label.
///
/// The presentation layer maps these to concrete glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
  Link,
  Gift,
  Person,
}

impl Icon {
  pub fn name(&self) -> &'static str {
    match self {
      Icon::Link => "link",
      Icon::Gift => "gift",
      Icon::Person => "person",
    }
  }
}

/// Container format of a hosted video source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VideoMime {
  Mp4,
  /// Anything that is not `.mp4`.
  Stream,
}

impl VideoMime {
  /// Classify an upstream `format` value such as `".mp4"`.
  pub fn from_format(format: &str) -> Self {
    if format == ".mp4" { VideoMime::Mp4 } else { VideoMime::Stream }
  }

  pub fn mime_type(&self) -> &'static str {
    match self {
      VideoMime::Mp4 => "video/mp4",
      VideoMime::Stream => "video/webm",
    }
  }
}

/// Hyperlink node; also used as the action of a [`RenderNode::Card`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
  pub href: String,
  pub target: LinkTarget,
  pub label: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub icon: Option<Icon>,
}

/// One node of the render tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderNode {
  /// A run of text.
  Text {
    content: String,
    bold: bool,
    /// `#rrggbb` color, already checked for readability.
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<String>,
  },
  Link(Link),
  Image {
    src: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    width: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    height: Option<u64>,
    /// Set for 690x320 article covers, which the UI draws with rounded corners.
    cover: bool,
  },
  Video {
    src: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    poster: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mime: Option<VideoMime>,
    /// Embedded through an iframe of a third-party host.
    framed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    width: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    height: Option<u64>,
  },
  Divider {
    asset: &'static str,
  },
  Card {
    cover: String,
    /// Trusted markup from the upstream authoring pipeline, not escaped.
    title_markup: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    price: Option<String>,
    action: Link,
  },
  /// Collapsible section built from a fold operation.
  Disclosure {
    summary: Vec<RenderNode>,
    body: Vec<RenderNode>,
  },
  /// Operation the renderer did not understand, kept for diagnostics.
  Unknown {
    raw: Value,
  },
}

impl RenderNode {
  /// Short snake_case name of the node kind.
  pub fn kind(&self) -> &'static str {
    match self {
      RenderNode::Text { .. } => "text",
      RenderNode::Link(_) => "link",
      RenderNode::Image { .. } => "image",
      RenderNode::Video { .. } => "video",
      RenderNode::Divider { .. } => "divider",
      RenderNode::Card { .. } => "card",
      RenderNode::Disclosure { .. } => "disclosure",
      RenderNode::Unknown { .. } => "unknown",
    }
  }

  pub fn is_unknown(&self) -> bool {
    matches!(self, RenderNode::Unknown { .. })
  }
}
