//! Output format definitions for the `render` subcommand.

use clap::ValueEnum;

/// How rendered posts are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
  /// Indented outline of the render tree (default)
  #[default]
  Tree,
  /// JSON array of nodes per post
  Json,
}

impl OutputFormat {
  /// Whether the format is meant for other programs rather than people.
  pub fn is_machine_readable(&self) -> bool {
    matches!(self, OutputFormat::Json)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_machine_readable() {
    assert!(OutputFormat::Json.is_machine_readable());
    assert!(!OutputFormat::Tree.is_machine_readable());
  }

  #[test]
  fn test_default_is_tree() {
    assert_eq!(OutputFormat::default(), OutputFormat::Tree);
  }
}
