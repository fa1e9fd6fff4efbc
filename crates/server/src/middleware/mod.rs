//! Request extractors for the mock shop.
//!
//! Two concerns live here: the bearer-token auth gate and the HTML/JSON
//! content-negotiation branch. Both are plain `FromRequestParts`
//! extractors so handlers declare them in their signatures.

pub mod auth;
pub mod negotiate;

pub use auth::{RequireBearer, bearer_user};
pub use negotiate::AcceptsHtml;
