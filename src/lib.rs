#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod api;
pub mod app;
pub mod config;
pub mod data;
pub mod models;
pub mod session;
pub mod ui;

pub use app::App;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Backend base URL (overrides ZENTRADER_BACKEND_URL and the default)
    #[arg(long)]
    pub backend_url: Option<String>,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
