//! Content negotiation extractor.
//!
//! Dual routes serve both a browser and an API client: if the request's
//! `Accept` header names `text/html` the handler renders a page shell,
//! otherwise it returns JSON. The branch is purely presentational; both
//! paths read the same state.

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

/// Extractor that reports whether the client asked for HTML.
///
/// True iff the `Accept` header contains `text/html`. A missing header
/// means an API client.
pub struct AcceptsHtml(pub bool);

impl<S> FromRequestParts<S> for AcceptsHtml
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let wants_html = parts
            .headers
            .get(header::ACCEPT)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|accept| accept.contains("text/html"));
        Ok(Self(wants_html))
    }
}

#[cfg(test)]
mod tests {
    use axum::http::Request;

    use super::*;

    async fn accepts(header_value: Option<&str>) -> bool {
        let mut builder = Request::builder().uri("/");
        if let Some(value) = header_value {
            builder = builder.header(header::ACCEPT, value);
        }
        let request = builder.body(()).expect("request");
        let (mut parts, ()) = request.into_parts();
        let AcceptsHtml(wants_html) = AcceptsHtml::from_request_parts(&mut parts, &())
            .await
            .expect("infallible");
        wants_html
    }

    #[tokio::test]
    async fn browser_accept_header_wants_html() {
        assert!(accepts(Some("text/html,application/xhtml+xml")).await);
    }

    #[tokio::test]
    async fn json_accept_header_wants_json() {
        assert!(!accepts(Some("application/json")).await);
    }

    #[tokio::test]
    async fn missing_accept_header_defaults_to_json() {
        assert!(!accepts(None).await);
    }
}
