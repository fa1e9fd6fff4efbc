//! HTTP route handlers for the mock shop.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Redirect to /login
//! GET  /health                 - Health check (wired in lib.rs)
//!
//! # Pages (HTML only)
//! GET  /login                  - Login page
//! GET  /register               - Register page
//!
//! # Auth (JSON only)
//! POST /auth/register          - Register, returns token
//! POST /auth/login             - Login, rotates and returns token
//!
//! # Products
//! GET  /products               - Listing page (HTML) or {products} (JSON)
//! GET  /products/search?q=     - Substring search (JSON)
//! GET  /products/{id}          - Detail page (HTML) or {product} (JSON)
//! GET  /api/products           - JSON listing for the page's fetch calls
//!
//! # Cart
//! GET  /cart                   - Cart page (HTML) or bearer-gated {cart, total}
//! GET  /api/cart               - Bearer-gated {cart, total}
//! POST /cart/items             - Bearer-gated add-to-cart
//! ```

pub mod auth;
pub mod cart;
pub mod home;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the auth API routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/search", get(products::search))
        .route("/{id}", get(products::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/items", post(cart::add_item))
}

/// Create the JSON-only API router used by the HTML pages' fetch calls.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(products::list))
        .route("/cart", get(cart::show_api))
}

/// Create all routes for the mock shop.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Root redirect
        .route("/", get(home::home))
        // Page shells
        .route("/login", get(auth::login_page))
        .route("/register", get(auth::register_page))
        // Auth API
        .nest("/auth", auth_routes())
        // Product routes
        .nest("/products", product_routes())
        // Cart routes
        .nest("/cart", cart_routes())
        // JSON-only API
        .nest("/api", api_routes())
}
