//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::services::{FixedCredentials, LoginHandler};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Decides login outcomes
    pub login_handler: Arc<dyn LoginHandler>,
}

impl AppState {
    /// Create application state with an injected login handler.
    pub fn new(login_handler: Arc<dyn LoginHandler>) -> Self {
        Self { login_handler }
    }
}

impl Default for AppState {
    /// State wired with the demo account handler.
    fn default() -> Self {
        Self::new(Arc::new(FixedCredentials::new()))
    }
}
