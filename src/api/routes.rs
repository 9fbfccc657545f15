//! Application route configuration.

use axum::Router;
use tower_http::trace::TraceLayer;

use super::handlers::auth_routes;
use super::middleware::cors_layer;
use super::AppState;
use crate::config::{Config, API_PREFIX};

/// Create the application router with all routes configured
pub fn create_router(state: AppState, config: &Config) -> Router {
    Router::new()
        // Public authentication routes
        .nest(API_PREFIX, auth_routes())
        // Global middleware
        .layer(cors_layer(&config.cors_allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
