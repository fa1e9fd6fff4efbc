//! Process-lifetime in-memory stores.
//!
//! The mock holds all state in flat in-memory collections: a user table, a
//! static product catalog, and a cart map keyed by user email. Nothing is
//! persisted; restarting the process resets the fixture.
//!
//! The maps use `dashmap` so the store can be shared across the runtime's
//! worker threads without a global lock. Each operation mutates a single
//! entry and is atomic within one request.

pub mod carts;
pub mod products;
pub mod users;

pub use carts::CartStore;
pub use products::Catalog;
pub use users::UserStore;

use thiserror::Error;

/// Errors surfaced by store operations.
///
/// Display strings are the exact messages clients see in `{"error": ...}`
/// bodies.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Registration attempted with an email that is already taken.
    #[error("User already exists")]
    UserExists,

    /// Login attempted with an unknown email or wrong password.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Cart mutation referenced a product id not in the catalog.
    #[error("Product not found")]
    UnknownProduct,
}
