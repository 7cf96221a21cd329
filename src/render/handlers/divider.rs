use serde_json::Value;

use super::unknown;
use crate::render::RenderNode;

/// Horizontal rule artwork for each divider style.
pub const DIVIDER_ASSETS: &[(&str, &str)] = &[
  (
    "line_1",
    "https://mihoyo-community-web.oss-cn-shanghai.aliyuncs.com/upload/2021/01/05/40eb5281cb24042bf34a9f1bcc61eaf5.png",
  ),
  (
    "line_2",
    "https://mihoyo-community-web.oss-cn-shanghai.aliyuncs.com/upload/2021/01/05/477d4c535e965bec1791203aecdfa8e6.png",
  ),
  (
    "line_3",
    "https://mihoyo-community-web.oss-cn-shanghai.aliyuncs.com/upload/2021/01/05/e7047588e912d60ff87a975e037c7606.png",
  ),
  (
    "line_4",
    "https://mihoyo-community-web.oss-cn-shanghai.aliyuncs.com/upload/2022/07/13/line_4.png",
  ),
];

/// Asset for a divider style, if the style is known.
pub fn divider_asset(tag: &str) -> Option<&'static str> {
  DIVIDER_ASSETS
    .iter()
    .find(|(name, _)| *name == tag)
    .map(|(_, asset)| *asset)
}

/// Renders a divider; unknown styles fall back to an unknown node.
pub(crate) fn render(tag: &str, raw: &Value) -> RenderNode {
  match divider_asset(tag) {
    Some(asset) => RenderNode::Divider { asset },
    None => unknown::render(raw),
  }
}
