//! CLI subcommand handlers.
//!
//! This module groups the implementations for each `mys-render` subcommand,
//! keeping `main.rs` lightweight while still allowing the handlers to share
//! utilities and types.

pub mod completions;
pub mod contrast;
pub mod render;
pub mod url;
pub mod version;
