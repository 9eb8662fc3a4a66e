//! Shopping cart: line items, the cart store seam, and checkout handoff

pub mod checkout;
pub mod line_item;
pub mod store;

pub use line_item::CartLineItem;
pub use store::{CartStore, JsonCartStore};
