//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Demo Login
// =============================================================================

/// Username accepted by the demo login
pub const DEMO_USERNAME: &str = "admin";

/// Password accepted by the demo login
pub const DEMO_PASSWORD: &str = "123";

/// Placeholder token handed out on a successful login
pub const MOCK_TOKEN: &str = "mock-jwt-token-for-demo";

/// Result code for a successful login
pub const CODE_LOGIN_SUCCEEDED: u16 = 200;

/// Result code for rejected credentials
pub const CODE_INVALID_CREDENTIALS: u16 = 400;

pub const MSG_LOGIN_SUCCEEDED: &str = "login succeeded";

pub const MSG_INVALID_CREDENTIALS: &str = "invalid username or password";

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port (the storefront front end points at :8081/api)
pub const DEFAULT_SERVER_PORT: u16 = 8081;

/// Route prefix shared by every API endpoint
pub const API_PREFIX: &str = "/api";

// =============================================================================
// CORS
// =============================================================================

/// Wildcard value accepted in CORS_ALLOWED_ORIGINS
pub const CORS_ANY_ORIGIN: &str = "*";

// =============================================================================
// Logging
// =============================================================================

/// Tracing filter used when neither --verbose nor RUST_LOG is given
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";
