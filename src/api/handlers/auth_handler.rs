//! Authentication handlers.

use axum::{extract::State, response::Json, routing::post, Router};

use crate::api::extractors::JsonBody;
use crate::api::AppState;
use crate::domain::{Credentials, LoginResult};

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

/// Log in with the demo account and get a placeholder token
///
/// Both outcomes are answered with HTTP 200; the result code in the body
/// tells them apart.
#[utoipa::path(
    post,
    path = "/api/login",
    tag = "Authentication",
    request_body = Credentials,
    responses(
        (status = 200, description = "Login outcome: code 200 with token, or code 400 without", body = LoginResult),
        (status = 400, description = "Body is not valid JSON")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    JsonBody(credentials): JsonBody<Credentials>,
) -> Json<LoginResult> {
    let result = state.login_handler.handle(&credentials);
    tracing::debug!(code = result.code(), "login attempt handled");
    Json(result)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use mockall::predicate::eq;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::services::MockLoginHandler;

    fn app(handler: MockLoginHandler) -> Router {
        auth_routes().with_state(AppState::new(Arc::new(handler)))
    }

    fn post_login(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_login_delegates_to_handler() {
        let mut handler = MockLoginHandler::new();
        handler
            .expect_handle()
            .with(eq(Credentials::new("alice", "secret")))
            .times(1)
            .returning(|_| LoginResult::succeeded());

        let response = app(handler)
            .oneshot(post_login(r#"{"username":"alice","password":"secret"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["code"], 200);
        assert_eq!(json["token"], "mock-jwt-token-for-demo");
    }

    #[tokio::test]
    async fn test_rejection_is_still_http_ok() {
        let mut handler = MockLoginHandler::new();
        handler
            .expect_handle()
            .returning(|_| LoginResult::invalid_credentials());

        let response = app(handler).oneshot(post_login("{}")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["code"], 400);
        assert!(json.get("token").is_none());
    }

    #[tokio::test]
    async fn test_malformed_body_never_reaches_handler() {
        let mut handler = MockLoginHandler::new();
        handler.expect_handle().never();

        let response = app(handler)
            .oneshot(post_login(r#"{"username":"admin","#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["code"], 400);
        assert!(json["msg"].is_string());
    }
}
