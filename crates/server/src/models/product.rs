//! Product domain type.

use serde::Serialize;

/// A catalog product.
///
/// The catalog is a static seed set, read-only at runtime. Prices are plain
/// `f64` so they serialize as JSON numbers, which the browser-side scripts
/// and API clients require.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub category: String,
}
