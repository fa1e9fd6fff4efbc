//! Root route.

use axum::response::Redirect;

/// Send visitors to the login page.
pub async fn home() -> Redirect {
    Redirect::to("/login")
}
