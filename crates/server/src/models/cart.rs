//! Cart domain types.

use serde::Serialize;

/// One line in a shopper's cart.
///
/// Name and price are denormalized copies taken from the product at add
/// time. Wire names are camelCase to match the JSON contract.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: u32,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl CartItem {
    /// Price times quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Sum of `price * quantity` over all lines, rounded to two decimals.
#[must_use]
pub fn total(items: &[CartItem]) -> f64 {
    let sum: f64 = items.iter().map(CartItem::line_total).sum();
    (sum * 100.0).round() / 100.0
}
