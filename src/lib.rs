//! miHoYo BBS post renderer library
//!
//! This library turns the structured content of BBS posts into a typed tree of
//! presentation nodes, and provides the `mys-render` command-line tool built
//! on top of it.

pub mod batch;
pub mod cli;
pub mod color;
pub mod commands;
pub mod contrast;
pub mod error;
pub mod format;
pub mod mys;
pub mod render;
pub mod theme;

pub use error::{RenderError, Result};
pub use render::{RenderNode, RenderOptions, render_post};
