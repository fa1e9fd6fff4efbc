//! Cart route handlers.
//!
//! The cart page itself is served to anyone; its embedded script fetches
//! `/api/cart` with the stored token. The JSON endpoints are bearer-gated.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Json,
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::middleware::{AcceptsHtml, RequireBearer, bearer_user};
use crate::models::{CartItem, cart};
use crate::state::AppState;
use crate::store::StoreError;

// =============================================================================
// Request / Response Types
// =============================================================================

/// Add-to-cart payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemRequest {
    pub product_id: Option<u32>,
    pub quantity: Option<i64>,
}

/// Cart contents with the rounded total.
#[derive(Debug, Serialize)]
pub struct CartResponse {
    pub cart: Vec<CartItem>,
    pub total: f64,
}

/// Add-to-cart response: confirmation plus the full updated cart.
#[derive(Debug, Serialize)]
pub struct AddItemResponse {
    pub message: &'static str,
    pub cart: Vec<CartItem>,
}

// =============================================================================
// Templates
// =============================================================================

/// Cart page template. Contents are rendered client-side from `/api/cart`.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartTemplate;

// =============================================================================
// Handlers
// =============================================================================

/// Cart: HTML shell for browsers; bearer-gated JSON otherwise.
///
/// The HTML branch is deliberately unauthenticated. The page's script does
/// the authenticated fetch so browser tests can exercise the
/// login-required message.
pub async fn show(
    State(state): State<AppState>,
    AcceptsHtml(wants_html): AcceptsHtml,
    headers: HeaderMap,
) -> Result<Response> {
    if wants_html {
        return Ok(CartTemplate.into_response());
    }
    let user = bearer_user(&state, &headers)?;
    Ok(Json(cart_payload(&state, &user.email)).into_response())
}

/// JSON-only cart endpoint for the HTML page's fetch calls.
pub async fn show_api(
    State(state): State<AppState>,
    RequireBearer(user): RequireBearer,
) -> Json<CartResponse> {
    Json(cart_payload(&state, &user.email))
}

/// Add an item to the authenticated user's cart.
///
/// Requires a positive quantity and an existing product id; merges into an
/// existing line or appends a new one.
pub async fn add_item(
    State(state): State<AppState>,
    RequireBearer(user): RequireBearer,
    Json(req): Json<AddItemRequest>,
) -> Result<Json<AddItemResponse>> {
    let (product_id, quantity) = match (req.product_id, req.quantity) {
        (Some(product_id), Some(quantity)) if product_id > 0 && quantity >= 1 => {
            (product_id, quantity)
        }
        _ => {
            return Err(AppError::BadRequest(
                "productId and quantity (>= 1) are required".to_owned(),
            ));
        }
    };
    // Bounded by the validation above.
    let quantity = u32::try_from(quantity)
        .map_err(|_| AppError::BadRequest("productId and quantity (>= 1) are required".to_owned()))?;

    let product = state
        .catalog()
        .get(product_id)
        .ok_or(StoreError::UnknownProduct)?;
    let updated = state.carts().add(&user.email, product, quantity);
    tracing::info!(email = %user.email, product_id, quantity, "item added to cart");

    Ok(Json(AddItemResponse {
        message: "Item added to cart",
        cart: updated,
    }))
}

fn cart_payload(state: &AppState, email: &str) -> CartResponse {
    let items = state.carts().items(email);
    let total = cart::total(&items);
    CartResponse { cart: items, total }
}
