//! Unified error handling for API responses.
//!
//! Provides a unified `AppError` type that maps to an HTTP status code with
//! a JSON `{"error": ...}` body. Route handlers return `Result<T, AppError>`.
//! The variant payload is the exact message the client sees.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

/// Application-level error type for the mock shop.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Missing or invalid authentication. The stored message already
    /// carries any "Unauthorized: " prefix the client should see.
    #[error("{0}")]
    Unauthorized(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request conflicts with existing state.
    #[error("Conflict: {0}")]
    Conflict(String),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        let message = err.to_string();
        match err {
            StoreError::UserExists => Self::Conflict(message),
            StoreError::InvalidCredentials => Self::Unauthorized(message),
            StoreError::UnknownProduct => Self::NotFound(message),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
        };

        let message = match self {
            Self::BadRequest(m) | Self::Unauthorized(m) | Self::NotFound(m) | Self::Conflict(m) => {
                m
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
