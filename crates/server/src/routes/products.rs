//! Product route handlers.
//!
//! `/products` and `/products/{id}` negotiate between the HTML shells and
//! JSON; `/api/products` and `/products/search` are JSON-only.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::filters;
use crate::middleware::AcceptsHtml;
use crate::models::Product;
use crate::state::AppState;

// =============================================================================
// Query / Response Types
// =============================================================================

/// Search query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

/// Product listing payload.
#[derive(Debug, Serialize)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
}

/// Search result payload; echoes the (lowercased) query.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub products: Vec<Product>,
    pub query: String,
}

/// Single product payload.
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub product: Product,
}

// =============================================================================
// Templates
// =============================================================================

/// Product listing page template. The list itself is rendered client-side
/// from `/api/products`.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate;

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub product: Product,
}

/// Product not-found page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/not_found.html")]
pub struct ProductNotFoundTemplate;

// =============================================================================
// Handlers
// =============================================================================

/// Product listing: HTML shell for browsers, JSON for API clients.
pub async fn index(State(state): State<AppState>, AcceptsHtml(wants_html): AcceptsHtml) -> Response {
    if wants_html {
        return ProductsIndexTemplate.into_response();
    }
    Json(ProductsResponse {
        products: state.catalog().all().to_vec(),
    })
    .into_response()
}

/// JSON-only listing for the HTML page's fetch calls.
pub async fn list(State(state): State<AppState>) -> Json<ProductsResponse> {
    Json(ProductsResponse {
        products: state.catalog().all().to_vec(),
    })
}

/// Substring search across name, description, and category (always JSON).
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<SearchResponse> {
    let q = query.q.unwrap_or_default().to_lowercase();
    Json(SearchResponse {
        products: state.catalog().search(&q),
        query: q,
    })
}

/// Product detail: HTML page or JSON, 404 in the negotiated format.
///
/// The id arrives as a raw path segment; anything that does not parse as a
/// catalog id is simply not found.
pub async fn show(
    State(state): State<AppState>,
    AcceptsHtml(wants_html): AcceptsHtml,
    Path(raw_id): Path<String>,
) -> Response {
    let product = raw_id
        .parse::<u32>()
        .ok()
        .and_then(|id| state.catalog().get(id).cloned());

    match (product, wants_html) {
        (Some(product), true) => ProductShowTemplate { product }.into_response(),
        (Some(product), false) => Json(ProductResponse { product }).into_response(),
        (None, true) => (StatusCode::NOT_FOUND, ProductNotFoundTemplate).into_response(),
        (None, false) => crate::error::AppError::NotFound("Product not found".to_owned())
            .into_response(),
    }
}
