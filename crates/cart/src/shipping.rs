use serde::{Deserialize, Serialize};

use storefront_core::ValueObject;

/// Subtotal at or above which shipping is free.
pub const DEFAULT_FREE_SHIPPING_THRESHOLD: u64 = 2000;

/// Flat fee charged below the free-shipping threshold.
pub const DEFAULT_FLAT_SHIPPING_FEE: u64 = 250;

const THRESHOLD_ENV: &str = "STOREFRONT_FREE_SHIPPING_THRESHOLD";
const FEE_ENV: &str = "STOREFRONT_FLAT_SHIPPING_FEE";

/// Shipping policy: a flat fee, waived once the subtotal reaches a threshold.
///
/// Amounts are in smallest currency unit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingPolicy {
    pub free_shipping_threshold: u64,
    pub flat_fee: u64,
}

impl ValueObject for ShippingPolicy {}

impl Default for ShippingPolicy {
    fn default() -> Self {
        Self {
            free_shipping_threshold: DEFAULT_FREE_SHIPPING_THRESHOLD,
            flat_fee: DEFAULT_FLAT_SHIPPING_FEE,
        }
    }
}

impl ShippingPolicy {
    pub fn new(free_shipping_threshold: u64, flat_fee: u64) -> Self {
        Self {
            free_shipping_threshold,
            flat_fee,
        }
    }

    /// Policy from `STOREFRONT_FREE_SHIPPING_THRESHOLD` / `STOREFRONT_FLAT_SHIPPING_FEE`,
    /// falling back to the defaults for unset or unparseable values.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            free_shipping_threshold: read_amount(&lookup, THRESHOLD_ENV)
                .unwrap_or(defaults.free_shipping_threshold),
            flat_fee: read_amount(&lookup, FEE_ENV).unwrap_or(defaults.flat_fee),
        }
    }

    /// Shipping charged on a non-empty cart with the given subtotal.
    ///
    /// Empty carts never reach this; [`crate::Cart`] ships them for free.
    pub fn cost_for(&self, subtotal: u64) -> u64 {
        if subtotal >= self.free_shipping_threshold {
            0
        } else {
            self.flat_fee
        }
    }

    /// How much more must be spent before shipping becomes free (0 if it already is).
    pub fn remaining_for_free(&self, subtotal: u64) -> u64 {
        self.free_shipping_threshold.saturating_sub(subtotal)
    }
}

fn read_amount(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<u64> {
    let raw = lookup(key)?;
    match raw.trim().parse::<u64>() {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::warn!(key, value = %raw, "ignoring invalid shipping setting: {e}");
            None
        }
    }
}
