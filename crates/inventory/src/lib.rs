//! Inventory module.
//!
//! Coordinates catalog validation and stock movements against a
//! [`ProductRepository`]. Storage itself lives behind the repository trait.

pub mod repository;
pub mod service;

pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::InventoryService;
