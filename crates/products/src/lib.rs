//! Products domain module.
//!
//! This crate contains the product catalog entities and their field rules,
//! implemented purely as deterministic domain logic (no IO, no storage).

pub mod category;
pub mod product;
pub mod validation;

pub use category::Category;
pub use product::{Product, StockStatus};
