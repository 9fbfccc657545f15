//! JSON body extractor - Deserialization with the application error envelope.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// JSON extractor whose rejections render as [`AppError::BadRequest`].
///
/// Axum's stock `Json` answers a bad body with a plain-text 400/415/422;
/// front ends of this API expect `{"code", "msg"}` for every failure.
///
/// # Example
///
/// ```rust,ignore
/// use mall_auth::api::extractors::JsonBody;
/// use mall_auth::domain::Credentials;
///
/// async fn login(JsonBody(credentials): JsonBody<Credentials>) {
///     // credentials deserialized, possibly with missing fields
/// }
/// ```
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        Ok(JsonBody(value))
    }
}
