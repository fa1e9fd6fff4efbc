//! Integration tests for the page shells and root redirect.

#![allow(clippy::unwrap_used)]

use axum::http::{StatusCode, header};
use cartwheel_integration_tests::{body_text, get, get_html, send, test_app};

#[tokio::test]
async fn root_redirects_to_login() {
    let app = test_app();

    let response = send(&app, get_html("/")).await;
    assert!(response.status().is_redirection());
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/login"
    );
}

#[tokio::test]
async fn login_page_renders_the_form() {
    let app = test_app();

    let response = send(&app, get_html("/login")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains(r#"data-testid="login-form""#));
    assert!(body.contains(r#"data-testid="login-email""#));
    assert!(body.contains(r#"data-testid="login-submit""#));
}

#[tokio::test]
async fn register_page_renders_the_form() {
    let app = test_app();

    let response = send(&app, get_html("/register")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains(r#"data-testid="register-form""#));
    assert!(body.contains(r#"data-testid="register-email""#));
    assert!(body.contains(r#"data-testid="register-submit""#));
}

#[tokio::test]
async fn every_page_carries_the_shared_nav() {
    let app = test_app();

    for uri in ["/login", "/register", "/products", "/cart"] {
        let response = send(&app, get_html(uri)).await;
        assert_eq!(response.status(), StatusCode::OK, "page {uri}");
        let body = body_text(response).await;
        assert!(body.contains(r#"data-testid="nav-login""#), "page {uri}");
        assert!(body.contains(r#"data-testid="nav-products""#), "page {uri}");
    }
}

#[tokio::test]
async fn health_endpoint_answers_ok() {
    let app = test_app();

    let response = send(&app, get("/health")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "ok");
}
