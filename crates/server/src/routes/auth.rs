//! Authentication route handlers.
//!
//! The JSON endpoints issue bearer tokens; the page handlers serve the
//! login/register shells whose embedded scripts call those endpoints and
//! stash the token in localStorage.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::state::AppState;

// =============================================================================
// Request / Response Types
// =============================================================================

/// Credentials payload shared by register and login.
///
/// Fields default to empty so a missing field reads the same as an empty
/// one and both get the same 400.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Successful register/login payload.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: &'static str,
    pub token: String,
    pub email: String,
}

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate;

/// Register page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/register.html")]
pub struct RegisterTemplate;

// =============================================================================
// JSON API
// =============================================================================

/// Handle registration.
///
/// Creates the user and issues their first token. Duplicate emails get 409.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<impl IntoResponse> {
    validate_credentials(&req)?;

    let user = state.users().register(&req.email, &req.password)?;
    tracing::info!(email = %user.email, "user registered");

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "User registered successfully",
            token: user.token,
            email: user.email,
        }),
    ))
}

/// Handle login.
///
/// Verifies credentials and rotates the bearer token; the previous token
/// stops matching.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<Json<AuthResponse>> {
    validate_credentials(&req)?;

    let user = state.users().login(&req.email, &req.password)?;
    tracing::info!(email = %user.email, "user logged in");

    Ok(Json(AuthResponse {
        message: "Login successful",
        token: user.token,
        email: user.email,
    }))
}

fn validate_credentials(req: &CredentialsRequest) -> Result<()> {
    if req.email.is_empty() || req.password.is_empty() {
        return Err(AppError::BadRequest(
            "Email and password are required".to_owned(),
        ));
    }
    Ok(())
}

// =============================================================================
// Pages
// =============================================================================

/// Display the login page.
pub async fn login_page() -> impl IntoResponse {
    LoginTemplate
}

/// Display the registration page.
pub async fn register_page() -> impl IntoResponse {
    RegisterTemplate
}
