//! Mall Auth - Demo login endpoint for the shopping mall front end
//!
//! Serves `POST /api/login`, which accepts one fixed demo account and
//! returns a placeholder token. There is no user storage and no real
//! token signing.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Credentials and login outcome types
//! - **services**: Login decision logic
//! - **api**: HTTP handlers, middleware, and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Print the OpenAPI document
//! cargo run -- openapi
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types at crate root
pub use api::{create_router, AppState};
pub use config::Config;
pub use domain::{Credentials, LoginResult};
pub use errors::{AppError, AppResult};
pub use services::{FixedCredentials, LoginHandler};
