//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: two instances with the same attribute
/// values are interchangeable. Shipping policies and field errors are value
/// objects; products and orders are entities (see [`crate::Entity`]).
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct ShippingPolicy {
///     free_shipping_threshold: u64,
///     flat_fee: u64,
/// }
///
/// impl ValueObject for ShippingPolicy {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
