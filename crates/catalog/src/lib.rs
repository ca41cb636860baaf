//! Product catalog (read-only from the cart's perspective).
//!
//! This crate holds the `Product` read model and the `Catalog` collaborator
//! the storefront lists products from. It has no HTTP or storage concerns
//! beyond the in-memory catalog used for development and tests.

pub mod catalog;
pub mod product;
pub mod query;
pub mod seed;

pub use catalog::{Catalog, InMemoryCatalog};
pub use product::{Product, slugify};
pub use query::{ProductQuery, ProductSort};
pub use seed::default_seed;
