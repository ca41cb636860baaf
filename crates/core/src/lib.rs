//! Domain building blocks shared by every storefront crate.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod validate;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult, FieldError, ValidationErrors};
pub use id::{ContactMessageId, OrderId, ProductId};
pub use value_object::ValueObject;
