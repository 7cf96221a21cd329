use tracing::debug;

use crate::error::{RenderError, Result};
use crate::render::node::VideoMime;
use crate::render::ops::{Resolution, Vod};
use crate::render::{RenderNode, VideoPolicy};

/// Tier labels tried, in order, by [`VideoPolicy::PreferDefinition`].
const PREFERRED_DEFINITIONS: &[&str] = &["1080P", "720P"];

/// Renders a hosted video using the rendition chosen by `policy`.
///
/// # Errors
/// Returns a contract violation when the video has no renditions.
pub(crate) fn render_hosted(vod: &Vod, policy: VideoPolicy) -> Result<RenderNode> {
  let resolution = select_resolution(&vod.resolutions, policy)
    .ok_or_else(|| RenderError::contract("vod", "video has no resolutions"))?;

  debug!(
    "Selected {} rendition ({} bytes) out of {}",
    resolution.definition,
    resolution.size.unwrap_or(0),
    vod.resolutions.len()
  );

  Ok(RenderNode::Video {
    src: resolution.url.clone(),
    poster: vod.cover.clone().filter(|cover| !cover.is_empty()),
    mime: Some(VideoMime::from_format(&resolution.format)),
    framed: false,
    width: resolution.width,
    height: resolution.height,
  })
}

/// Renders a third-party video embedded through an iframe.
pub(crate) fn render_embedded(src: &str) -> RenderNode {
  RenderNode::Video {
    src: src.to_string(),
    poster: None,
    mime: None,
    framed: true,
    width: None,
    height: None,
  }
}

/// Picks one rendition.
///
/// [`VideoPolicy::LargestSize`] keeps the first rendition with the maximum
/// byte size; missing sizes count as zero.
fn select_resolution(resolutions: &[Resolution], policy: VideoPolicy) -> Option<&Resolution> {
  match policy {
    VideoPolicy::LargestSize => resolutions.iter().reduce(|best, candidate| {
      if candidate.size.unwrap_or(0) > best.size.unwrap_or(0) {
        candidate
      } else {
        best
      }
    }),
    VideoPolicy::PreferDefinition => PREFERRED_DEFINITIONS
      .iter()
      .find_map(|tier| {
        resolutions
          .iter()
          .find(|resolution| resolution.definition.eq_ignore_ascii_case(tier))
      })
      .or_else(|| resolutions.first()),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn resolution(url: &str, size: Option<u64>, definition: &str) -> Resolution {
    Resolution {
      url: url.to_string(),
      format: ".mp4".to_string(),
      size,
      definition: definition.to_string(),
      width: Some(1280),
      height: Some(720),
    }
  }

  fn vod(resolutions: Vec<Resolution>) -> Vod {
    Vod {
      cover: Some("cover.jpg".to_string()),
      resolutions,
    }
  }

  #[test]
  fn test_largest_size_first_max_wins() {
    let resolutions = vec![
      resolution("a", Some(100), "480P"),
      resolution("b", Some(300), "720P"),
      resolution("c", Some(300), "1080P"),
    ];
    let selected = select_resolution(&resolutions, VideoPolicy::LargestSize).unwrap();
    assert_eq!(selected.url, "b");
  }

  #[test]
  fn test_missing_sizes_count_as_zero() {
    let resolutions = vec![resolution("a", None, ""), resolution("b", Some(1), "")];
    assert_eq!(select_resolution(&resolutions, VideoPolicy::LargestSize).unwrap().url, "b");

    let resolutions = vec![resolution("a", None, ""), resolution("b", None, "")];
    assert_eq!(select_resolution(&resolutions, VideoPolicy::LargestSize).unwrap().url, "a");
  }

  #[test]
  fn test_prefer_definition_order() {
    let resolutions = vec![
      resolution("sd", Some(900), "480P"),
      resolution("hd", Some(100), "720P"),
      resolution("fhd", Some(200), "1080P"),
    ];
    assert_eq!(
      select_resolution(&resolutions, VideoPolicy::PreferDefinition).unwrap().url,
      "fhd"
    );

    let resolutions = vec![resolution("sd", Some(900), "480P"), resolution("hd", Some(100), "720p")];
    assert_eq!(
      select_resolution(&resolutions, VideoPolicy::PreferDefinition).unwrap().url,
      "hd"
    );

    let resolutions = vec![resolution("x", Some(1), "360P"), resolution("y", Some(2), "480P")];
    assert_eq!(
      select_resolution(&resolutions, VideoPolicy::PreferDefinition).unwrap().url,
      "x"
    );
  }

  #[test]
  fn test_hosted_video_node() {
    let mut stream = resolution("https://v.example/b.m3u8", Some(300), "1080P");
    stream.format = ".m3u8".to_string();
    let node = render_hosted(&vod(vec![resolution("a", Some(1), "480P"), stream]), VideoPolicy::LargestSize).unwrap();

    assert_eq!(
      node,
      RenderNode::Video {
        src: "https://v.example/b.m3u8".to_string(),
        poster: Some("cover.jpg".to_string()),
        mime: Some(VideoMime::Stream),
        framed: false,
        width: Some(1280),
        height: Some(720),
      }
    );
  }

  #[test]
  fn test_empty_resolutions_is_contract_violation() {
    let err = render_hosted(&vod(vec![]), VideoPolicy::LargestSize).unwrap_err();
    assert!(matches!(err, RenderError::ContractViolation { variant: "vod", .. }));
  }

  #[test]
  fn test_embedded_video_is_framed() {
    let RenderNode::Video { src, framed, mime, .. } = render_embedded("https://player.example/embed/1") else {
      panic!("expected video");
    };
    assert_eq!(src, "https://player.example/embed/1");
    assert!(framed);
    assert_eq!(mime, None);
  }
}
