//! Records with a stable identity.

/// Something identified by id rather than by its attribute values.
///
/// Products, orders and contact messages are entities: a product whose price
/// changes is still the same product, and the cart matches lines by
/// [`Entity::id`] alone.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}
