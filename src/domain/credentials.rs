//! Credentials submitted by a caller.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use utoipa::ToSchema;

/// Username/password pair taken from a login request.
///
/// Both fields are optional: a field that is missing or `null` in the
/// request body is simply "not provided" and never matches. Numbers and
/// booleans are taken as their text form (`123` reads as `"123"`).
#[derive(Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct Credentials {
    /// Account name
    #[serde(default, deserialize_with = "scalar_as_string")]
    #[schema(example = "admin")]
    pub username: Option<String>,
    /// Account password
    #[serde(default, deserialize_with = "scalar_as_string")]
    #[schema(example = "123")]
    pub password: Option<String>,
}

impl Credentials {
    /// Build credentials with both fields present.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            password: Some(password.into()),
        }
    }

    /// Check for an exact, case-sensitive match on both fields.
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username.as_deref() == Some(username) && self.password.as_deref() == Some(password)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Read a JSON scalar as text; `null` is "not provided".
///
/// Objects and arrays are still rejected.
fn scalar_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(ScalarVisitor)
}

struct ScalarVisitor;

impl<'de> Visitor<'de> for ScalarVisitor {
    type Value = Option<String>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, number, boolean or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(Some(v))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    // Debug keeps the fraction on whole floats: 1.0 -> "1.0"
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(Some(format!("{:?}", v)))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_deserialize_as_none() {
        let credentials: Credentials = serde_json::from_str("{}").unwrap();
        assert_eq!(credentials, Credentials::default());

        let credentials: Credentials =
            serde_json::from_str(r#"{"username":null,"password":"123"}"#).unwrap();
        assert!(credentials.username.is_none());
        assert_eq!(credentials.password.as_deref(), Some("123"));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let credentials: Credentials =
            serde_json::from_str(r#"{"username":"admin","password":"123","remember":true}"#)
                .unwrap();
        assert_eq!(credentials, Credentials::new("admin", "123"));
    }

    #[test]
    fn test_scalars_read_as_text() {
        let credentials: Credentials =
            serde_json::from_str(r#"{"username":"admin","password":123}"#).unwrap();
        assert_eq!(credentials, Credentials::new("admin", "123"));

        let credentials: Credentials =
            serde_json::from_str(r#"{"username":true,"password":-1.5}"#).unwrap();
        assert_eq!(credentials, Credentials::new("true", "-1.5"));

        let credentials: Credentials =
            serde_json::from_str(r#"{"username":false,"password":2.0}"#).unwrap();
        assert_eq!(credentials, Credentials::new("false", "2.0"));
    }

    #[test]
    fn test_nested_values_are_rejected() {
        assert!(serde_json::from_str::<Credentials>(r#"{"username":["admin"]}"#).is_err());
        assert!(serde_json::from_str::<Credentials>(r#"{"password":{"value":"123"}}"#).is_err());
    }

    #[test]
    fn test_matches_is_exact() {
        let credentials = Credentials::new("admin", "123");
        assert!(credentials.matches("admin", "123"));
        assert!(!credentials.matches("Admin", "123"));
        assert!(!Credentials::new("admin ", "123").matches("admin", "123"));
        assert!(!Credentials::default().matches("admin", "123"));
    }

    #[test]
    fn test_debug_redacts_password() {
        let rendered = format!("{:?}", Credentials::new("admin", "123"));
        assert!(rendered.contains("admin"));
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("\"123\""));
    }
}
