//! Domain layer - Login request and outcome types
//!
//! Pure data with no infrastructure dependencies beyond serde and
//! the OpenAPI schema derive.

pub mod credentials;
pub mod login;

pub use credentials::Credentials;
pub use login::LoginResult;
