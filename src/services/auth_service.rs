//! Authentication service - Decides the outcome of a login attempt.
//!
//! The demo build accepts exactly one fixed credential pair and hands out a
//! placeholder token. Handlers are pure: no logging, storage or I/O.

use crate::config::{DEMO_PASSWORD, DEMO_USERNAME};
use crate::domain::{Credentials, LoginResult};

#[cfg(test)]
use mockall::automock;

/// Login handler trait for dependency injection.
#[cfg_attr(test, automock)]
pub trait LoginHandler: Send + Sync {
    /// Check credentials and produce the login outcome.
    fn handle(&self, credentials: &Credentials) -> LoginResult;
}

/// Accepts only the built-in demo account.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedCredentials;

impl FixedCredentials {
    pub fn new() -> Self {
        Self
    }
}

impl LoginHandler for FixedCredentials {
    fn handle(&self, credentials: &Credentials) -> LoginResult {
        if credentials.matches(DEMO_USERNAME, DEMO_PASSWORD) {
            LoginResult::succeeded()
        } else {
            LoginResult::invalid_credentials()
        }
    }
}
