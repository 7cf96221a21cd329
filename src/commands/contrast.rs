//! `contrast` subcommand: check a text color against a background.

use crate::color::ColorScheme;
use crate::contrast::{HexColor, SIMILARITY_THRESHOLD, colors_too_similar, contrast_ratio};

/// Print the contrast ratio of the pair and whether the renderer would
/// replace the text color.
pub(crate) fn handle_contrast_command(background: HexColor, foreground: HexColor, colors: &ColorScheme) {
  let ratio = contrast_ratio(background, foreground);

  println!("{}: {}", colors.emphasis("Background"), colors.swatch(background));
  println!("{}: {}", colors.emphasis("Text"), colors.swatch(foreground));
  println!(
    "{}: {} {}",
    colors.emphasis("Contrast ratio"),
    colors.number(format!("{ratio:.2}:1")),
    colors.dimmed(format!("(threshold {SIMILARITY_THRESHOLD:.1})"))
  );

  if colors_too_similar(background, foreground) {
    println!(
      "{} {}",
      colors.warning("⚠"),
      colors.warning("Too similar: the theme's default text color is used instead")
    );
  } else {
    println!("{} {}", colors.success("✓"), colors.success("Readable"));
  }
}
