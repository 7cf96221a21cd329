//! `render` subcommand for printing render trees of saved posts.
//!
//! Each input is loaded through [`FileSource`], rendered, and printed either
//! as an ASCII outline or as JSON. A post that fails to render is reported with
//! the generic failure message and does not stop the remaining posts.

use std::process;

use anyhow::Result;
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::batch::{RenderedPost, render_batch};
use crate::cli::{Cli, RenderArgs};
use crate::color::ColorScheme;
use crate::format::OutputFormat;
use crate::mys::FileSource;
use crate::render::{RenderNode, VideoMime};

/// Message shown in place of a post whose content could not be rendered.
pub const RENDER_FAILURE_MESSAGE: &str = "could not render this post";

/// Widest text preview shown in the outline, in terminal columns.
const PREVIEW_WIDTH: usize = 48;

/// Execute the `render` subcommand.
///
/// Exits with status 1 when any post failed to render.
///
/// # Arguments
/// * `args` - Parsed `render` arguments.
/// * `cli` - Top-level CLI options.
/// * `colors` - Shared color palette used to render terminal output.
pub(crate) async fn handle_render_command(args: &RenderArgs, cli: &Cli, colors: &ColorScheme) {
  let options = args.render_options();
  let parallel = args.performance.resolved_parallel();

  if !cli.behavior.quiet && !args.format.is_machine_readable() {
    eprintln!(
      "{} {}",
      colors.progress("→"),
      colors.info(format!(
        "Rendering {} {}",
        colors.number(args.inputs.len()),
        if args.inputs.len() == 1 { "post" } else { "posts" }
      ))
    );
  }

  let results = render_batch(&FileSource, &args.inputs, &options, parallel).await;
  let failures = results.iter().filter(|post| !post.is_ok()).count();

  let printed = match args.format {
    OutputFormat::Tree => {
      for post in &results {
        for line in format_post_lines(post, colors) {
          println!("{line}");
        }
      }
      Ok(())
    }
    OutputFormat::Json => print_json(&results),
  };

  if let Err(error) = printed {
    eprintln!("{} {}", colors.error("✗"), colors.error("Failed to write output"));
    eprintln!("  {}: {}", colors.emphasis("Error"), error);
    process::exit(1);
  }

  if failures > 0 {
    eprintln!(
      "{} {}",
      colors.error("✗"),
      colors.error(format!("{failures} of {} posts failed to render", results.len()))
    );
    process::exit(1);
  }
}

#[derive(Serialize)]
struct JsonPost<'a> {
  reference: &'a str,
  #[serde(skip_serializing_if = "Option::is_none")]
  subject: Option<&'a str>,
  #[serde(skip_serializing_if = "Option::is_none")]
  nodes: Option<&'a [RenderNode]>,
  #[serde(skip_serializing_if = "Option::is_none")]
  error: Option<&'static str>,
}

fn print_json(results: &[RenderedPost]) -> Result<()> {
  let posts: Vec<JsonPost<'_>> = results
    .iter()
    .map(|post| JsonPost {
      reference: &post.reference,
      subject: post.subject.as_deref(),
      nodes: post.outcome.as_ref().ok().map(Vec::as_slice),
      error: post.outcome.is_err().then_some(RENDER_FAILURE_MESSAGE),
    })
    .collect();

  println!("{}", serde_json::to_string_pretty(&posts)?);
  Ok(())
}

/// One labelled line of the outline with its nested lines.
#[derive(Debug, Clone, PartialEq)]
struct OutlineEntry {
  label: String,
  children: Vec<OutlineEntry>,
}

impl OutlineEntry {
  fn leaf(label: String) -> Self {
    Self {
      label,
      children: Vec::new(),
    }
  }
}

fn format_post_lines(post: &RenderedPost, colors: &ColorScheme) -> Vec<String> {
  let title = match &post.subject {
    Some(subject) => format!("{} {}", colors.emphasis(subject), colors.dimmed(format!("({})", post.reference))),
    None => colors.emphasis(&post.reference),
  };

  let children = match &post.outcome {
    Ok(nodes) => nodes.iter().map(|node| outline_entry(node, colors)).collect(),
    Err(_) => vec![OutlineEntry::leaf(colors.error(RENDER_FAILURE_MESSAGE))],
  };

  let root = OutlineEntry { label: title, children };
  let mut lines = Vec::new();
  format_tree_lines_recursive(&root, String::new(), true, true, &mut lines);
  lines
}

fn format_tree_lines_recursive(
  entry: &OutlineEntry,
  prefix: String,
  is_last: bool,
  is_root: bool,
  lines: &mut Vec<String>,
) {
  let line = if is_root {
    entry.label.clone()
  } else if is_last {
    format!("{prefix}└── {}", entry.label)
  } else {
    format!("{prefix}├── {}", entry.label)
  };
  lines.push(line);

  let next_prefix = if is_root {
    prefix
  } else if is_last {
    format!("{prefix}    ")
  } else {
    format!("{prefix}│   ")
  };

  for (idx, child) in entry.children.iter().enumerate() {
    let child_is_last = idx + 1 == entry.children.len();
    format_tree_lines_recursive(child, next_prefix.clone(), child_is_last, false, lines);
  }
}

fn outline_entry(node: &RenderNode, colors: &ColorScheme) -> OutlineEntry {
  let kind = colors.node_kind(node.kind());

  match node {
    RenderNode::Text { content, bold, color } => {
      let mut label = format!("{kind} {}", quoted_preview(content));
      if *bold {
        label.push_str(&format!(" {}", colors.dimmed("bold")));
      }
      if let Some(color) = color {
        label.push_str(&format!(" {}", colors.dimmed(color)));
      }
      OutlineEntry::leaf(label)
    }
    RenderNode::Link(link) => {
      let icon = link.icon.map(|icon| format!(" [{}]", icon.name())).unwrap_or_default();
      OutlineEntry::leaf(format!(
        "{kind} {} → {} {}{icon}",
        quoted_preview(&link.label),
        colors.link(&link.href),
        colors.dimmed(format!("({})", link.target.name()))
      ))
    }
    RenderNode::Image {
      src,
      width,
      height,
      cover,
    } => {
      let mut label = format!("{kind} {}", colors.link(src));
      if let (Some(width), Some(height)) = (width, height) {
        label.push_str(&format!(" {}", colors.number(format!("{width}x{height}"))));
      }
      if *cover {
        label.push_str(&format!(" {}", colors.dimmed("cover")));
      }
      OutlineEntry::leaf(label)
    }
    RenderNode::Video {
      src,
      poster,
      mime,
      framed,
      ..
    } => {
      let detail = if *framed {
        "framed".to_string()
      } else {
        mime.map(|mime: VideoMime| mime.mime_type()).unwrap_or("video").to_string()
      };
      let mut label = format!("{kind} {} {}", colors.link(src), colors.dimmed(format!("({detail})")));
      if let Some(poster) = poster {
        label.push_str(&format!(" poster {}", colors.link(poster)));
      }
      OutlineEntry::leaf(label)
    }
    RenderNode::Divider { asset } => OutlineEntry::leaf(format!("{kind} {}", colors.link(asset))),
    RenderNode::Card {
      title_markup,
      price,
      action,
      ..
    } => {
      let mut label = format!("{kind} {}", quoted_preview(title_markup));
      if let Some(price) = price {
        label.push_str(&format!(" {}", colors.number(price)));
      }
      label.push_str(&format!(" [{}] → {}", action.label, colors.link(&action.href)));
      OutlineEntry::leaf(label)
    }
    RenderNode::Disclosure { summary, body } => OutlineEntry {
      label: kind,
      children: vec![
        OutlineEntry {
          label: colors.dimmed("summary"),
          children: summary.iter().map(|child| outline_entry(child, colors)).collect(),
        },
        OutlineEntry {
          label: colors.dimmed("body"),
          children: body.iter().map(|child| outline_entry(child, colors)).collect(),
        },
      ],
    },
    RenderNode::Unknown { raw } => OutlineEntry::leaf(format!(
      "{} {}",
      colors.warning(node.kind()),
      colors.dimmed(truncate_to_width(&raw.to_string(), PREVIEW_WIDTH))
    )),
  }
}

/// Quote `text` on one line, shortened to the preview width.
fn quoted_preview(text: &str) -> String {
  let single_line = text.replace('\n', "⏎");
  format!("\"{}\"", truncate_to_width(&single_line, PREVIEW_WIDTH))
}

/// Shorten `text` to at most `width` terminal columns, ending in `…` when cut.
fn truncate_to_width(text: &str, width: usize) -> String {
  if text.width() <= width {
    return text.to_string();
  }

  let mut used = 0;
  let mut result = String::new();
  for ch in text.chars() {
    let ch_width = ch.width().unwrap_or(0);
    if used + ch_width > width.saturating_sub(1) {
      break;
    }
    used += ch_width;
    result.push(ch);
  }
  result.push('…');
  result
}
