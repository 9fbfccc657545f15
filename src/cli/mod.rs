//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `serve` - Start the HTTP server
//! - `openapi` - Print the API description

pub mod args;

pub use args::{Cli, Commands};
