//! Test support for driving the cartwheel router in-process.
//!
//! Tests build the full application router (state, routes, middleware) and
//! push requests through it with `tower::ServiceExt::oneshot`, so no socket
//! is bound and every test gets its own fresh in-memory state.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use serde_json::Value;
use tower::util::ServiceExt;

use cartwheel_server::config::ServerConfig;
use cartwheel_server::state::AppState;

/// Build a fresh application with empty stores and the seed catalog.
#[must_use]
pub fn test_app() -> Router {
    cartwheel_server::app(AppState::new(ServerConfig::default()))
}

/// Send one request through the app. The router is cloned so the same app
/// (and its state) can serve a whole test scenario.
pub async fn send(app: &Router, request: Request<Body>) -> Response<axum::body::Body> {
    app.clone().oneshot(request).await.unwrap()
}

/// Build a GET request. No `Accept` header, which the server reads as an
/// API client.
#[must_use]
pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Build a GET request with a browser-style `Accept` header.
#[must_use]
pub fn get_html(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::ACCEPT, "text/html,application/xhtml+xml")
        .body(Body::empty())
        .unwrap()
}

/// Build a GET request carrying a bearer token.
#[must_use]
pub fn get_with_token(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

/// Build a JSON POST request.
#[must_use]
pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Build a JSON POST request carrying a bearer token.
#[must_use]
pub fn post_json_with_token(uri: &str, token: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Read a response body as JSON.
pub async fn body_json(response: Response<axum::body::Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Read a response body as text.
pub async fn body_text(response: Response<axum::body::Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Register a user and return their bearer token.
pub async fn register(app: &Router, email: &str, password: &str) -> String {
    let response = send(
        app,
        post_json(
            "/auth/register",
            &serde_json::json!({ "email": email, "password": password }),
        ),
    )
    .await;
    assert!(
        response.status().is_success(),
        "registration should succeed"
    );
    let body = body_json(response).await;
    body["token"].as_str().unwrap().to_owned()
}
