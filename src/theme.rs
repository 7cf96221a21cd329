//! Background palettes used to keep author-chosen text colors readable.

use clap::ValueEnum;

use crate::contrast::HexColor;

/// Background of the light theme.
pub const LIGHT_BACKGROUND: HexColor = HexColor::new(0xec, 0xe5, 0xd8);
/// Background of the dark theme.
pub const DARK_BACKGROUND: HexColor = HexColor::new(0x1e, 0x1e, 0x1e);
/// Default text color of the light theme.
pub const LIGHT_TEXT: HexColor = HexColor::new(0x39, 0x3b, 0x40);
/// Default text color of the dark theme.
pub const DARK_TEXT: HexColor = HexColor::new(0xfa, 0xf7, 0xe8);

/// App theme the rendered post will be shown under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Theme {
  #[default]
  Light,
  Dark,
}

/// Colors the text handler checks author colors against.
///
/// Both themes' backgrounds are checked regardless of the active theme, since
/// the same rendered post may be displayed under either. Only the replacement
/// color depends on the theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
  /// Backgrounds a text color must stay distinguishable from.
  pub backgrounds: Vec<HexColor>,
  /// Color substituted for author colors that fail the contrast check.
  pub default_text: HexColor,
}

impl Palette {
  /// The built-in palette for `theme`.
  pub fn for_theme(theme: Theme) -> Self {
    let default_text = match theme {
      Theme::Light => LIGHT_TEXT,
      Theme::Dark => DARK_TEXT,
    };

    Self {
      backgrounds: vec![LIGHT_BACKGROUND, DARK_BACKGROUND],
      default_text,
    }
  }
}

impl Default for Palette {
  fn default() -> Self {
    Self::for_theme(Theme::default())
  }
}
