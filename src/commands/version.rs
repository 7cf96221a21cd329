//! Version/metadata reporting.
//!
//! Implements the `mys-render version` subcommand, which prints either a
//! human-readable summary or a JSON document describing the build.

use serde::Serialize;

use crate::color::ColorScheme;

/// Build metadata captured by `build.rs`.
#[derive(Debug, Serialize)]
struct BuildInfo {
  version: &'static str,
  git_commit: &'static str,
  build_timestamp: String,
  target: &'static str,
  rust_version: &'static str,
}

impl BuildInfo {
  fn current() -> Self {
    Self {
      version: env!("CARGO_PKG_VERSION"),
      git_commit: env!("GIT_HASH"),
      build_timestamp: format_timestamp(env!("BUILD_TIMESTAMP")),
      target: env!("TARGET"),
      rust_version: env!("RUSTC_VERSION"),
    }
  }
}

/// Render version and build metadata in JSON or human-readable form.
///
/// # Arguments
/// * `json` - When `true`, emit a JSON document instead of colored text.
/// * `short` - When `true`, print only the semantic version string.
/// * `colors` - Shared color palette for styled terminal output.
pub(crate) fn handle_version_command(json: bool, short: bool, colors: &ColorScheme) {
  let info = BuildInfo::current();

  if short {
    println!("{}", info.version);
    return;
  }

  if json {
    match serde_json::to_string_pretty(&info) {
      Ok(document) => println!("{document}"),
      Err(e) => eprintln!("{} {e}", colors.error("Error:")),
    }
    return;
  }

  println!("{} {}", colors.emphasis("mys-render"), colors.number(info.version));
  println!("{}: {}", colors.emphasis("Git commit"), colors.info(info.git_commit));
  println!("{}: {}", colors.emphasis("Built"), colors.dimmed(&info.build_timestamp));
  println!("{}: {}", colors.emphasis("Target"), info.target);
  println!("{}: {}", colors.emphasis("Rust version"), info.rust_version);
}

/// Convert the embedded build timestamp into a human-readable ISO-8601 string.
///
/// # Arguments
/// * `timestamp` - Unix epoch seconds encoded as a string.
///
/// # Returns
/// ISO-8601 UTC timestamp when parsing succeeds, otherwise the raw input.
fn format_timestamp(timestamp: &str) -> String {
  timestamp
    .parse::<i64>()
    .ok()
    .and_then(|ts| chrono::DateTime::<chrono::Utc>::from_timestamp(ts, 0))
    .map(|datetime| datetime.format("%Y-%m-%d %H:%M:%S UTC").to_string())
    .unwrap_or_else(|| timestamp.to_string())
}
