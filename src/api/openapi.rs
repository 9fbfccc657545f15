//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::api::handlers::auth_handler;
use crate::domain::{Credentials, LoginResult};

/// OpenAPI documentation for the login API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mall Auth",
        version = "0.1.0",
        description = "Demo login endpoint for the shopping mall front end",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8081", description = "Local development server")
    ),
    paths(auth_handler::login),
    components(schemas(Credentials, LoginResult)),
    tags(
        (name = "Authentication", description = "Demo login")
    )
)]
pub struct ApiDoc;
