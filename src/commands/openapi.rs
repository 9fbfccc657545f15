//! OpenAPI command - Prints the API description to stdout.

use utoipa::OpenApi;

use crate::api::ApiDoc;
use crate::errors::{AppError, AppResult};

/// Execute the openapi command
pub async fn execute() -> AppResult<()> {
    let json = ApiDoc::openapi()
        .to_pretty_json()
        .map_err(|e| AppError::internal(format!("Failed to render OpenAPI document: {}", e)))?;

    println!("{}", json);
    Ok(())
}
