//! Smoke tests against a running server.
//!
//! These tests require the server running locally:
//! `cargo run -p cartwheel-server`
//!
//! They cover the same flows as the in-process tests but over a real
//! socket, which is what the browser-driven suites see.

#![allow(clippy::unwrap_used)]

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

/// Base URL for the server (configurable via environment).
fn base_url() -> String {
    std::env::var("CARTWHEEL_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_owned())
}

/// A unique email per run so reruns against the same process don't collide.
fn unique_email() -> String {
    format!("user_{}@test.com", unix_nanos())
}

fn unix_nanos() -> u128 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos()
}

#[tokio::test]
#[ignore = "Requires running cartwheel server"]
async fn register_login_and_fill_cart_over_http() {
    let client = Client::new();
    let base = base_url();
    let email = unique_email();

    // Register
    let resp = client
        .post(format!("{base}/auth/register"))
        .json(&json!({ "email": email, "password": "TestPass123!" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = resp.json().await.unwrap();
    let token = body["token"].as_str().unwrap().to_owned();

    // Add to cart
    let resp = client
        .post(format!("{base}/cart/items"))
        .bearer_auth(&token)
        .json(&json!({ "productId": 1, "quantity": 2 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    // Read it back with the total
    let resp = client
        .get(format!("{base}/api/cart"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["cart"][0]["quantity"], 2);
    assert_eq!(body["total"], 159.98);
}

#[tokio::test]
#[ignore = "Requires running cartwheel server"]
async fn products_page_serves_html_to_browsers() {
    let client = Client::new();
    let base = base_url();

    let resp = client
        .get(format!("{base}/products"))
        .header("Accept", "text/html")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.unwrap();
    assert!(body.contains(r#"data-testid="products-list""#));
}
