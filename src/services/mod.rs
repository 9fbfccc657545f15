//! Application services layer - Use cases and business logic.
//!
//! Services are exposed as traits so the HTTP layer depends on
//! abstractions and tests can swap in mocks.

mod auth_service;

pub use auth_service::{FixedCredentials, LoginHandler};

#[cfg(test)]
pub use auth_service::MockLoginHandler;
