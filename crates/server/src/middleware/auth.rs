//! Bearer-token authentication extractor.
//!
//! Provides an extractor for requiring a valid bearer token in route
//! handlers, resolving the token to a user by exact equality against the
//! user table. There is no expiry and no revocation beyond the token being
//! overwritten on the next login.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{HeaderMap, header, request::Parts},
};

use crate::error::AppError;
use crate::models::User;
use crate::state::AppState;

/// Extractor that requires bearer-token authentication.
///
/// Rejects with 401 and a JSON `{"error": ...}` body when the header is
/// missing, malformed, or does not match any user's current token.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireBearer(user): RequireBearer,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", user.email)
/// }
/// ```
pub struct RequireBearer(pub User);

impl<S> FromRequestParts<S> for RequireBearer
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);
        let user = bearer_user(&state, &parts.headers)?;
        Ok(Self(user))
    }
}

/// Resolve the user behind an `Authorization: Bearer <token>` header.
///
/// Shared with the one route that only authenticates in its JSON branch.
///
/// # Errors
///
/// Returns `AppError::Unauthorized` with a message distinguishing a
/// missing/malformed header from a token that matches nobody.
pub fn bearer_user(state: &AppState, headers: &HeaderMap) -> Result<User, AppError> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| {
            AppError::Unauthorized("Unauthorized: Missing or invalid token".to_owned())
        })?;

    state
        .users()
        .find_by_token(token)
        .ok_or_else(|| AppError::Unauthorized("Unauthorized: Invalid token".to_owned()))
}
