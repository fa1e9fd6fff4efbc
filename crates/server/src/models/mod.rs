//! Domain models for the mock shop.

pub mod cart;
pub mod product;
pub mod user;

pub use cart::CartItem;
pub use product::Product;
pub use user::User;
