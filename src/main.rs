//! mys-render - Render BBS structured post content
//!
//! This is the main entry point for the CLI application.

#[tokio::main]
async fn main() {
  mys_render::cli::run().await;
}
