//! Cart snapshot persistence.
//!
//! The full ordered line-item list is written as one JSON document under a
//! fixed, versioned key. Loading never fails: a missing, unreadable or
//! unparseable value hydrates an empty cart.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cart::{Cart, CartLineItem};
use crate::shipping::ShippingPolicy;
use crate::slot::KeyValueStore;

/// Storage key for the cart snapshot.
pub const CART_STORAGE_KEY: &str = "storefront-cart-storage/v1";

/// Snapshot schema version written into every envelope.
const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("slot io failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("slot backend failed: {0}")]
    Backend(String),
}

/// Whether the adapter has loaded or written the slot yet.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HydrationState {
    Uninitialized,
    Hydrated,
}

#[derive(Serialize)]
struct SnapshotRef<'a> {
    version: u32,
    items: &'a [CartLineItem],
}

#[derive(Deserialize)]
struct Snapshot {
    version: u32,
    items: Vec<CartLineItem>,
}

/// Mirrors a [`Cart`] to a key/value slot.
#[derive(Debug)]
pub struct CartPersistence<S> {
    slot: S,
    key: String,
    state: HydrationState,
}

impl<S: KeyValueStore> CartPersistence<S> {
    /// Adapter over `slot` using [`CART_STORAGE_KEY`].
    pub fn new(slot: S) -> Self {
        Self::with_key(slot, CART_STORAGE_KEY)
    }

    pub fn with_key(slot: S, key: impl Into<String>) -> Self {
        Self {
            slot,
            key: key.into(),
            state: HydrationState::Uninitialized,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn state(&self) -> HydrationState {
        self.state
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    /// Write the cart's line items, replacing any previous snapshot.
    ///
    /// Serialisation happens before the slot is touched; the slot itself
    /// writes atomically, so on error the previous value is still intact.
    pub fn save(&mut self, cart: &Cart) -> Result<(), PersistError> {
        let snapshot = SnapshotRef {
            version: SNAPSHOT_VERSION,
            items: cart.items(),
        };
        let encoded = serde_json::to_string(&snapshot)?;
        self.slot.put(&self.key, &encoded)?;

        self.state = HydrationState::Hydrated;
        tracing::debug!(key = %self.key, lines = cart.items().len(), "cart snapshot saved");
        Ok(())
    }

    /// Read the snapshot back into a cart using `shipping` for its totals.
    ///
    /// Degrades to an empty cart on any problem; never returns an error.
    pub fn load(&mut self, shipping: ShippingPolicy) -> Cart {
        self.state = HydrationState::Hydrated;

        let raw = match self.slot.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!(key = %self.key, "no cart snapshot; starting empty");
                return Cart::new(shipping);
            }
            Err(e) => {
                tracing::warn!(key = %self.key, "cart snapshot unreadable; starting empty: {e}");
                return Cart::new(shipping);
            }
        };

        match decode(&raw) {
            Ok(items) => {
                tracing::debug!(key = %self.key, lines = items.len(), "cart snapshot loaded");
                Cart::from_items(items, shipping)
            }
            Err(reason) => {
                tracing::warn!(key = %self.key, "discarding corrupt cart snapshot: {reason}");
                Cart::new(shipping)
            }
        }
    }
}

fn decode(raw: &str) -> Result<Vec<CartLineItem>, String> {
    let snapshot: Snapshot = serde_json::from_str(raw).map_err(|e| e.to_string())?;
    if snapshot.version != SNAPSHOT_VERSION {
        return Err(format!("unsupported snapshot version {}", snapshot.version));
    }
    Ok(snapshot.items)
}
