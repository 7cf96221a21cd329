//! Color utilities for terminal output
//!
//! Semantic styling for CLI messages and render-tree outlines, respecting the
//! `--color` preference and terminal capabilities.

use owo_colors::OwoColorize;

use crate::cli::ColorOption;
use crate::contrast::HexColor;

/// Color scheme for the application
pub struct ColorScheme {
  enabled: bool,
}

impl ColorScheme {
  /// Create a new color scheme based on user preference and terminal
  /// capabilities
  pub fn new(color_option: ColorOption) -> Self {
    let enabled = match color_option {
      ColorOption::Always => true,
      ColorOption::Never => false,
      ColorOption::Auto => {
        use std::io::IsTerminal;
        std::io::stdout().is_terminal()
      }
    };

    Self { enabled }
  }

  pub fn is_enabled(&self) -> bool {
    self.enabled
  }

  fn paint<T: std::fmt::Display>(&self, text: T, style: impl FnOnce(&T) -> String) -> String {
    if self.enabled { style(&text) } else { text.to_string() }
  }

  /// Style for success messages (green)
  pub fn success<T: std::fmt::Display>(&self, text: T) -> String {
    self.paint(text, |t| t.green().to_string())
  }

  /// Style for error messages (bright red)
  pub fn error<T: std::fmt::Display>(&self, text: T) -> String {
    self.paint(text, |t| t.bright_red().bold().to_string())
  }

  /// Style for warning messages (yellow)
  pub fn warning<T: std::fmt::Display>(&self, text: T) -> String {
    self.paint(text, |t| t.yellow().to_string())
  }

  /// Style for info messages (cyan)
  pub fn info<T: std::fmt::Display>(&self, text: T) -> String {
    self.paint(text, |t| t.cyan().to_string())
  }

  /// Style for emphasis/important text (bright white, bold)
  pub fn emphasis<T: std::fmt::Display>(&self, text: T) -> String {
    self.paint(text, |t| t.bright_white().bold().to_string())
  }

  /// Style for URLs and links (blue, underlined)
  pub fn link<T: std::fmt::Display>(&self, text: T) -> String {
    self.paint(text, |t| t.blue().underline().to_string())
  }

  /// Style for numbers and metrics (bright blue)
  pub fn number<T: std::fmt::Display>(&self, text: T) -> String {
    self.paint(text, |t| t.bright_blue().to_string())
  }

  /// Style for dimmed/secondary text (gray)
  pub fn dimmed<T: std::fmt::Display>(&self, text: T) -> String {
    self.paint(text, |t| t.dimmed().to_string())
  }

  /// Style for progress indicators (bright cyan)
  pub fn progress<T: std::fmt::Display>(&self, text: T) -> String {
    self.paint(text, |t| t.bright_cyan().to_string())
  }

  /// Style for render node kind labels (magenta, bold)
  pub fn node_kind<T: std::fmt::Display>(&self, text: T) -> String {
    self.paint(text, |t| t.magenta().bold().to_string())
  }

  /// A two-cell block filled with `color`, followed by its hex code.
  ///
  /// Without color support only the hex code is printed.
  pub fn swatch(&self, color: HexColor) -> String {
    if !self.enabled {
      return color.to_string();
    }

    let (r, g, b) = color.channels();
    format!("{} {color}", "  ".on_truecolor(r, g, b))
  }
}
