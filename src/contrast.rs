//! Relative-luminance contrast checks for author-chosen text colors.
//!
//! Post authors may pick any text color. Some of them disappear against the
//! app's backgrounds, so the text handler asks [`is_too_similar`] before
//! keeping a color. The math follows the WCAG relative luminance definition,
//! but the threshold is far looser than the accessibility guideline: only
//! near-invisible combinations are caught.

use std::fmt;
use std::str::FromStr;

use crate::error::{RenderError, Result};

/// Contrast ratios at or below this value count as "too similar".
pub const SIMILARITY_THRESHOLD: f64 = 2.5;

/// An sRGB color parsed from a strict `#rrggbb` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
  r: u8,
  g: u8,
  b: u8,
}

impl HexColor {
  pub const fn new(r: u8, g: u8, b: u8) -> Self {
    Self { r, g, b }
  }

  /// Red, green and blue channels in `0..=255`.
  pub fn channels(&self) -> (u8, u8, u8) {
    (self.r, self.g, self.b)
  }

  /// WCAG relative luminance in `0.0..=1.0`.
  pub fn relative_luminance(&self) -> f64 {
    0.2126 * linearize(self.r) + 0.7152 * linearize(self.g) + 0.0722 * linearize(self.b)
  }
}

impl FromStr for HexColor {
  type Err = RenderError;

  fn from_str(value: &str) -> Result<Self> {
    let invalid = || RenderError::InvalidColor {
      value: value.to_string(),
    };

    let digits = value.strip_prefix('#').ok_or_else(invalid)?;
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
      return Err(invalid());
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).map_err(|_| invalid());
    Ok(Self {
      r: channel(0..2)?,
      g: channel(2..4)?,
      b: channel(4..6)?,
    })
  }
}

impl fmt::Display for HexColor {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
  }
}

fn linearize(channel: u8) -> f64 {
  let c = f64::from(channel) / 255.0;
  if c <= 0.03928 {
    c / 12.92
  } else {
    ((c + 0.055) / 1.055).powf(2.4)
  }
}

/// Contrast ratio between two colors, from `1.0` (identical) to `21.0`.
///
/// The ratio is symmetric: argument order does not matter.
pub fn contrast_ratio(a: HexColor, b: HexColor) -> f64 {
  let la = a.relative_luminance();
  let lb = b.relative_luminance();
  (la.max(lb) + 0.05) / (la.min(lb) + 0.05)
}

/// Returns `true` when the pair's contrast ratio is at or below
/// [`SIMILARITY_THRESHOLD`].
pub fn colors_too_similar(background: HexColor, foreground: HexColor) -> bool {
  contrast_ratio(background, foreground) <= SIMILARITY_THRESHOLD
}

/// Returns `true` when `foreground` would be hard to read on `background`.
///
/// # Errors
/// Returns [`RenderError::InvalidColor`] when either argument is not a strict
/// `#rrggbb` hex string.
pub fn is_too_similar(background: &str, foreground: &str) -> Result<bool> {
  let background: HexColor = background.parse()?;
  let foreground: HexColor = foreground.parse()?;
  Ok(colors_too_similar(background, foreground))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_hex_color() {
    let color: HexColor = "#ece5d8".parse().unwrap();
    assert_eq!(color.channels(), (0xec, 0xe5, 0xd8));
    assert_eq!(color.to_string(), "#ece5d8");
  }

  #[test]
  fn test_parse_accepts_uppercase_digits() {
    let color: HexColor = "#1E1E1E".parse().unwrap();
    assert_eq!(color, HexColor::new(0x1e, 0x1e, 0x1e));
  }

  #[test]
  fn test_parse_rejects_short_and_malformed_colors() {
    for value in ["#fff", "ece5d8", "#ece5d", "#ece5d8ff", "#gggggg", "", "#", "rgb(0,0,0)"] {
      let err = value.parse::<HexColor>().unwrap_err();
      assert!(matches!(err, RenderError::InvalidColor { .. }), "{value} should be rejected");
    }
  }

  #[test]
  fn test_identical_colors_are_too_similar() {
    assert!(is_too_similar("#ece5d8", "#ece5d8").unwrap());
    let color: HexColor = "#ece5d8".parse().unwrap();
    assert!((contrast_ratio(color, color) - 1.0).abs() < 1e-12);
  }

  #[test]
  fn test_black_on_white_is_maximal() {
    let ratio = contrast_ratio(HexColor::new(0, 0, 0), HexColor::new(255, 255, 255));
    assert!((ratio - 21.0).abs() < 1e-9);
    assert!(!is_too_similar("#ffffff", "#000000").unwrap());
  }

  #[test]
  fn test_similarity_is_symmetric() {
    let pairs = [
      ("#ece5d8", "#faf7e8"),
      ("#1e1e1e", "#000000"),
      ("#1e1e1e", "#ece5d8"),
      ("#777777", "#888888"),
      ("#ff0000", "#00ff00"),
    ];
    for (a, b) in pairs {
      assert_eq!(is_too_similar(a, b).unwrap(), is_too_similar(b, a).unwrap(), "{a} vs {b}");
    }
  }

  #[test]
  fn test_threshold_boundary() {
    // Near-black on the dark background is unreadable, mid gray is fine.
    assert!(is_too_similar("#1e1e1e", "#000000").unwrap());
    assert!(!is_too_similar("#1e1e1e", "#777777").unwrap());
  }

  #[test]
  fn test_threshold_edge_on_black() {
    let black = HexColor::new(0, 0, 0);

    // Just below the threshold: still too similar.
    let below = HexColor::new(0x4d, 0x4d, 0x4d);
    let ratio = contrast_ratio(black, below);
    assert!(ratio > 2.48 && ratio <= SIMILARITY_THRESHOLD, "ratio {ratio}");
    assert!(colors_too_similar(black, below));

    // One step lighter crosses it.
    let above = HexColor::new(0x4e, 0x4e, 0x4e);
    let ratio = contrast_ratio(black, above);
    assert!(ratio > SIMILARITY_THRESHOLD && ratio < 2.53, "ratio {ratio}");
    assert!(!colors_too_similar(black, above));
    assert!(!is_too_similar("#000000", "#4e4e4e").unwrap());
  }

  #[test]
  fn test_invalid_foreground_is_reported() {
    let err = is_too_similar("#ffffff", "red").unwrap_err();
    assert_eq!(err.to_string(), "invalid hex color `red` (expected #rrggbb)");
  }
}
