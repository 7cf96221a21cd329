//! Command-line interface definitions for mys-render.
//!
//! This module defines the CLI structure using clap derives and dispatches
//! parsed commands to their handlers.

use std::process;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use crate::color::ColorScheme;
use crate::commands::completions::{Shell, handle_completions_command};
use crate::commands::contrast::handle_contrast_command;
use crate::commands::render::handle_render_command;
use crate::commands::url::handle_url_command;
use crate::commands::version::handle_version_command;
use crate::contrast::HexColor;
use crate::format::OutputFormat;
use crate::mys::STDIN_REFERENCE;
use crate::render::{DEFAULT_MAX_DEPTH, FailurePolicy, RenderOptions, VideoPolicy};
use crate::theme::{Palette, Theme};

/// mys-render - Render BBS structured post content
#[derive(Debug, Parser)]
#[command(
  name = "mys-render",
  version,
  about = "Render BBS structured post content",
  long_about = "A command-line tool for rendering miHoYo BBS posts into a typed presentation tree.\n\
                Reads saved post payloads from files or stdin and prints an outline or JSON.",
  styles = get_clap_styles()
)]
pub struct Cli {
  /// Subcommand to execute
  #[command(subcommand)]
  pub command: Command,

  /// Behavior options
  #[command(flatten)]
  pub behavior: BehaviorOptions,
}

/// Available subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
  /// Render saved post payloads
  Render(RenderArgs),

  /// Show how a URL found in post content would be routed
  Url {
    /// URL to classify
    #[arg(value_name = "URL")]
    url: String,
  },

  /// Check whether a text color is readable on a background
  Contrast {
    /// Background color (#rrggbb)
    #[arg(value_name = "BACKGROUND", value_parser = parse_hex_color)]
    background: HexColor,

    /// Text color (#rrggbb)
    #[arg(value_name = "FOREGROUND", value_parser = parse_hex_color)]
    foreground: HexColor,
  },

  /// Display version and build information
  Version {
    /// Output in JSON format
    #[arg(long)]
    json: bool,

    /// Show only version number
    #[arg(long)]
    short: bool,
  },

  /// Generate shell completion scripts
  Completions {
    /// Target shell for completions
    #[arg(value_enum)]
    shell: Shell,
  },
}

/// Arguments of the `render` subcommand
#[derive(Debug, Args)]
pub struct RenderArgs {
  /// Post payload files (`-` reads stdin)
  #[arg(value_name = "POST_FILE", required = true)]
  pub inputs: Vec<String>,

  /// Output format
  #[arg(long, value_enum, default_value = "tree", value_name = "FORMAT")]
  pub format: OutputFormat,

  /// Theme options
  #[command(flatten)]
  pub theme: ThemeOptions,

  /// Rendering options
  #[command(flatten)]
  pub rendering: RenderingOptions,

  /// Performance options
  #[command(flatten)]
  pub performance: PerformanceOptions,
}

fn parse_hex_color(value: &str) -> Result<HexColor, String> {
  value.trim().parse().map_err(|e: crate::error::RenderError| e.to_string())
}

/// Theme options
#[derive(Debug, Args)]
pub struct ThemeOptions {
  /// Theme whose default text color replaces unreadable author colors
  #[arg(long, env = "MYS_RENDER_THEME", value_enum, default_value = "light", value_name = "THEME")]
  pub theme: Theme,

  /// Backgrounds author colors are checked against (replaces the built-in pair)
  #[arg(
    long = "background",
    env = "MYS_RENDER_BACKGROUNDS",
    value_delimiter = ',',
    value_parser = parse_hex_color,
    value_name = "HEX"
  )]
  pub backgrounds: Vec<HexColor>,

  /// Replacement for unreadable author colors (overrides the theme default)
  #[arg(long, env = "MYS_RENDER_TEXT_COLOR", value_parser = parse_hex_color, value_name = "HEX")]
  pub default_text_color: Option<HexColor>,
}

impl ThemeOptions {
  /// Build the palette from the theme plus any overrides.
  pub fn palette(&self) -> Palette {
    let mut palette = Palette::for_theme(self.theme);
    if !self.backgrounds.is_empty() {
      palette.backgrounds = self.backgrounds.clone();
    }
    if let Some(color) = self.default_text_color {
      palette.default_text = color;
    }
    palette
  }
}

/// Rendering options
#[derive(Debug, Args)]
pub struct RenderingOptions {
  /// Maximum fold nesting depth
  #[arg(long, default_value_t = DEFAULT_MAX_DEPTH, value_name = "N")]
  pub max_depth: usize,

  /// How hosted videos choose a rendition
  #[arg(long, value_enum, default_value = "largest-size", value_name = "POLICY")]
  pub video_policy: VideoPolicy,

  /// Render failing operations as unknown nodes instead of failing the post
  #[arg(long)]
  pub isolate_failures: bool,
}

/// Behavior options
#[derive(Debug, Args)]
pub struct BehaviorOptions {
  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count, global = true)]
  pub verbose: u8,

  /// Suppress all output except errors
  #[arg(short, long, conflicts_with = "verbose", global = true)]
  pub quiet: bool,

  /// Colorize output
  #[arg(long, value_enum, default_value = "auto", value_name = "WHEN", global = true)]
  pub color: ColorOption,
}

/// Color output options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorOption {
  Auto,
  Always,
  Never,
}

/// Performance options
#[derive(Debug, Args)]
pub struct PerformanceOptions {
  /// Number of posts loaded in parallel (`-1` uses available cores)
  #[arg(long, default_value = "4", value_name = "N", allow_negative_numbers = true)]
  pub parallel: isize,
}

impl PerformanceOptions {
  /// Resolve the parallel limit into a concrete positive value.
  pub fn resolved_parallel(&self) -> usize {
    match self.parallel {
      value if value > 0 => value as usize,
      -1 => std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1),
      _ => 1, // Validation should prevent other values.
    }
  }
}

impl RenderArgs {
  /// Rendering options assembled from the flags.
  pub fn render_options(&self) -> RenderOptions {
    RenderOptions {
      palette: self.theme.palette(),
      max_depth: self.rendering.max_depth,
      video_policy: self.rendering.video_policy,
      failure_policy: if self.rendering.isolate_failures {
        FailurePolicy::Isolate
      } else {
        FailurePolicy::Abort
      },
    }
  }
}

impl Cli {
  /// Parse CLI arguments from the environment
  pub fn parse_args() -> Self {
    Self::parse()
  }

  /// Validate CLI arguments
  ///
  /// Returns an error if the CLI configuration is invalid.
  pub fn validate(&self) -> Result<(), String> {
    if let Command::Render(args) = &self.command {
      if args.performance.parallel == 0 || args.performance.parallel < -1 {
        return Err("--parallel must be at least 1 or -1 to use available cores".to_string());
      }

      let stdin_count = args.inputs.iter().filter(|input| *input == STDIN_REFERENCE).count();
      if stdin_count > 1 {
        return Err("stdin (`-`) can only be given once".to_string());
      }
    }

    Ok(())
  }
}

/// Parse CLI arguments, initialize shared services, and dispatch to the chosen
/// command.
pub async fn run() {
  let cli = Cli::parse_args();

  init_tracing(&cli.behavior);

  let colors = ColorScheme::new(cli.behavior.color);

  if let Err(e) = cli.validate() {
    eprintln!("{} {}", colors.error("Error:"), e);
    process::exit(4); // Invalid arguments exit code
  }

  match &cli.command {
    Command::Render(args) => {
      handle_render_command(args, &cli, &colors).await;
    }
    Command::Url { url } => {
      handle_url_command(url, &colors);
    }
    Command::Contrast { background, foreground } => {
      handle_contrast_command(*background, *foreground, &colors);
    }
    Command::Version { json, short } => {
      handle_version_command(*json, *short, &colors);
    }
    Command::Completions { shell } => {
      handle_completions_command(*shell);
    }
  }
}

fn init_tracing(behavior: &BehaviorOptions) {
  let level = if behavior.quiet {
    LevelFilter::ERROR
  } else {
    match behavior.verbose {
      0 => LevelFilter::WARN,
      1 => LevelFilter::INFO,
      2 => LevelFilter::DEBUG,
      _ => LevelFilter::TRACE,
    }
  };

  let env_filter = EnvFilter::builder()
    .with_default_directive(level.into())
    .from_env_lossy();

  let _ = tracing_subscriber::fmt()
    .with_env_filter(env_filter)
    .with_target(false)
    .with_writer(std::io::stderr)
    .try_init();
}

/// Get custom styles for clap help output
fn get_clap_styles() -> clap::builder::Styles {
  use clap::builder::styling::{AnsiColor, Effects};

  clap::builder::Styles::styled()
    .header(AnsiColor::BrightYellow.on_default() | Effects::BOLD)
    .usage(AnsiColor::BrightYellow.on_default() | Effects::BOLD)
    .literal(AnsiColor::BrightGreen.on_default())
    .placeholder(AnsiColor::BrightCyan.on_default())
    .error(AnsiColor::BrightRed.on_default() | Effects::BOLD)
    .valid(AnsiColor::BrightGreen.on_default())
    .invalid(AnsiColor::BrightRed.on_default())
}
