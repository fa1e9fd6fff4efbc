//! In-memory cart map.

use dashmap::DashMap;

use crate::models::{CartItem, Product};

/// Carts keyed by user email.
///
/// A cart is an ordered list of lines; insertion order is preserved. An
/// absent key means an empty cart. Carts are created lazily on first add
/// and never explicitly deleted.
#[derive(Debug, Default)]
pub struct CartStore {
    by_email: DashMap<String, Vec<CartItem>>,
}

impl CartStore {
    /// Snapshot of a user's cart, empty if they have none.
    #[must_use]
    pub fn items(&self, email: &str) -> Vec<CartItem> {
        self.by_email
            .get(email)
            .map(|cart| cart.clone())
            .unwrap_or_default()
    }

    /// Add a product to a user's cart and return the full updated cart.
    ///
    /// Re-adding a product increments the existing line's quantity rather
    /// than appending a duplicate; the count saturates instead of wrapping.
    /// The line copies the product's name and price at add time.
    pub fn add(&self, email: &str, product: &Product, quantity: u32) -> Vec<CartItem> {
        let mut cart = self.by_email.entry(email.to_owned()).or_default();
        match cart.iter_mut().find(|line| line.product_id == product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => cart.push(CartItem {
                product_id: product.id,
                name: product.name.clone(),
                price: product.price,
                quantity,
            }),
        }
        cart.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Catalog;

    #[test]
    fn missing_cart_reads_as_empty() {
        let carts = CartStore::default();
        assert!(carts.items("nobody@test.com").is_empty());
    }

    #[test]
    fn re_adding_a_product_merges_quantities() {
        let catalog = Catalog::seed();
        let carts = CartStore::default();
        let headphones = catalog.get(1).expect("product 1");

        carts.add("a@test.com", headphones, 2);
        let cart = carts.add("a@test.com", headphones, 3);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].quantity, 5);
    }

    #[test]
    fn merged_quantities_saturate_instead_of_overflowing() {
        let catalog = Catalog::seed();
        let carts = CartStore::default();
        let headphones = catalog.get(1).expect("product 1");

        carts.add("a@test.com", headphones, u32::MAX);
        let cart = carts.add("a@test.com", headphones, 1);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].quantity, u32::MAX);
    }

    #[test]
    fn lines_keep_insertion_order() {
        let catalog = Catalog::seed();
        let carts = CartStore::default();

        carts.add("a@test.com", catalog.get(3).expect("product 3"), 1);
        carts.add("a@test.com", catalog.get(1).expect("product 1"), 1);
        let cart = carts.items("a@test.com");

        let ids: Vec<u32> = cart.iter().map(|line| line.product_id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn carts_are_isolated_per_user() {
        let catalog = Catalog::seed();
        let carts = CartStore::default();

        carts.add("a@test.com", catalog.get(1).expect("product 1"), 1);
        assert!(carts.items("b@test.com").is_empty());
    }

    #[test]
    fn line_copies_name_and_price_from_product() {
        let catalog = Catalog::seed();
        let carts = CartStore::default();

        let cart = carts.add("a@test.com", catalog.get(1).expect("product 1"), 2);
        assert_eq!(cart[0].name, "Wireless Headphones");
        assert!((cart[0].price - 79.99).abs() < f64::EPSILON);
    }
}
