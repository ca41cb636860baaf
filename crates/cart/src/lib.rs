//! Shopping cart domain module.
//!
//! - `cart`: the cart aggregate (line items, stock clamps, totals)
//! - `shipping`: flat-fee / free-threshold shipping policy
//! - `persistence`: versioned snapshot save/load over a key/value slot
//! - `slot`: key/value slot backends (in-memory, file)
//! - `store`: `CartStore`, the handle callers mutate through (mutate, then save)

pub mod cart;
pub mod persistence;
pub mod shipping;
pub mod slot;
pub mod store;

pub use cart::{Cart, CartChange, CartLineItem};
pub use persistence::{CART_STORAGE_KEY, CartPersistence, HydrationState, PersistError};
pub use shipping::ShippingPolicy;
pub use slot::{FileKeyValueStore, InMemoryKeyValueStore, KeyValueStore};
pub use store::CartStore;
