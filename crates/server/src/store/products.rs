//! Static product catalog.

use crate::models::Product;

/// Read-only catalog seeded at startup.
#[derive(Debug)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build the fixed seed catalog the test suites are written against.
    #[must_use]
    pub fn seed() -> Self {
        let products = vec![
            product(
                1,
                "Wireless Headphones",
                79.99,
                "Bluetooth over-ear headphones with noise cancellation",
                "Electronics",
            ),
            product(
                2,
                "Running Shoes",
                129.99,
                "Lightweight running shoes with cushioned sole",
                "Sports",
            ),
            product(
                3,
                "Coffee Maker",
                49.99,
                "12-cup programmable coffee maker",
                "Kitchen",
            ),
            product(
                4,
                "Backpack",
                59.99,
                "Water-resistant laptop backpack",
                "Accessories",
            ),
            product(
                5,
                "Wireless Mouse",
                29.99,
                "Ergonomic wireless mouse with USB receiver",
                "Electronics",
            ),
        ];
        Self { products }
    }

    /// All products, in catalog order.
    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Case-insensitive substring search across name, description, and
    /// category. An empty query matches everything. No ranking, no
    /// pagination.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<Product> {
        let needle = query.to_lowercase();
        self.products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
                    || p.category.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }
}

fn product(id: u32, name: &str, price: f64, description: &str, category: &str) -> Product {
    Product {
        id,
        name: name.to_owned(),
        price,
        description: description.to_owned(),
        category: category.to_owned(),
    }
}
