//! Login outcome returned to the caller.

use serde::Serialize;
use utoipa::ToSchema;

use crate::config::{
    CODE_INVALID_CREDENTIALS, CODE_LOGIN_SUCCEEDED, MOCK_TOKEN, MSG_INVALID_CREDENTIALS,
    MSG_LOGIN_SUCCEEDED,
};

/// Result of a login attempt.
///
/// Only constructible through [`LoginResult::succeeded`] and
/// [`LoginResult::invalid_credentials`], so `token` is present exactly
/// when `code` is 200.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct LoginResult {
    /// 200 on success, 400 on rejected credentials
    #[schema(example = 200)]
    code: u16,
    /// Human-readable outcome
    #[serde(rename = "msg")]
    #[schema(example = "login succeeded")]
    message: String,
    /// Placeholder token, only on success
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "mock-jwt-token-for-demo")]
    token: Option<String>,
}

impl LoginResult {
    /// Successful login carrying the placeholder token.
    pub fn succeeded() -> Self {
        Self {
            code: CODE_LOGIN_SUCCEEDED,
            message: MSG_LOGIN_SUCCEEDED.to_string(),
            token: Some(MOCK_TOKEN.to_string()),
        }
    }

    /// Rejected credentials, no token.
    pub fn invalid_credentials() -> Self {
        Self {
            code: CODE_INVALID_CREDENTIALS,
            message: MSG_INVALID_CREDENTIALS.to_string(),
            token: None,
        }
    }

    /// Result code (200 or 400).
    pub fn code(&self) -> u16 {
        self.code
    }

    /// Human-readable outcome.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Token, present only on success.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Whether the credentials were accepted.
    pub fn is_success(&self) -> bool {
        self.code == CODE_LOGIN_SUCCEEDED
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_succeeded_carries_token() {
        let result = LoginResult::succeeded();
        assert!(result.is_success());
        assert_eq!(result.code(), 200);
        assert_eq!(result.token(), Some("mock-jwt-token-for-demo"));
    }

    #[test]
    fn test_invalid_credentials_has_no_token() {
        let result = LoginResult::invalid_credentials();
        assert!(!result.is_success());
        assert_eq!(result.code(), 400);
        assert_eq!(result.message(), "invalid username or password");
        assert!(result.token().is_none());
    }

    #[test]
    fn test_wire_shape() {
        assert_eq!(
            serde_json::to_value(LoginResult::succeeded()).unwrap(),
            json!({"code": 200, "msg": "login succeeded", "token": "mock-jwt-token-for-demo"})
        );
        // no "token" key at all on failure
        assert_eq!(
            serde_json::to_value(LoginResult::invalid_credentials()).unwrap(),
            json!({"code": 400, "msg": "invalid username or password"})
        );
    }
}
