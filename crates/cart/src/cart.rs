//! Cart aggregate: line items keyed by product, stock clamps, derived totals.
//!
//! Every operation is total. Requests that would break the quantity bounds are
//! clamped (`set_quantity`) or dropped (`add` past the stock ceiling, `add` of
//! an out-of-stock product); callers learn which through [`CartChange`].

use serde::{Deserialize, Serialize};

use storefront_catalog::Product;
use storefront_core::ProductId;

use crate::shipping::ShippingPolicy;

/// One product-plus-quantity row of the cart.
///
/// `product` is the snapshot taken when the line was (last) added; its
/// `stock_count` is the line's stock ceiling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartLineItem {
    pub fn product_id(&self) -> &ProductId {
        &self.product.id
    }

    /// `price * quantity` in smallest currency unit.
    pub fn line_total(&self) -> u64 {
        self.product.price.saturating_mul(u64::from(self.quantity))
    }
}

/// Outcome of a cart mutation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CartChange {
    Changed,
    /// The request was a no-op (unknown product, stock ceiling reached, ...).
    Unchanged,
}

impl CartChange {
    pub fn is_changed(self) -> bool {
        matches!(self, CartChange::Changed)
    }
}

/// Aggregate root: the shopping cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    items: Vec<CartLineItem>,
    shipping: ShippingPolicy,
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(ShippingPolicy::default())
    }
}

impl Cart {
    /// Empty cart.
    pub fn new(shipping: ShippingPolicy) -> Self {
        Self {
            items: Vec::new(),
            shipping,
        }
    }

    /// Rebuild a cart from previously persisted line items.
    ///
    /// Snapshots are taken verbatim (stock is not re-validated); duplicate
    /// product ids keep the first occurrence so the uniqueness invariant holds.
    pub fn from_items(items: Vec<CartLineItem>, shipping: ShippingPolicy) -> Self {
        let mut unique: Vec<CartLineItem> = Vec::with_capacity(items.len());
        for item in items {
            if unique.iter().any(|i| i.product.id == item.product.id) {
                tracing::warn!(product_id = %item.product.id, "dropping duplicate cart line");
                continue;
            }
            unique.push(item);
        }
        Self {
            items: unique,
            shipping,
        }
    }

    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn shipping_policy(&self) -> ShippingPolicy {
        self.shipping
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn line(&self, product_id: &ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|i| &i.product.id == product_id)
    }

    /// Quantity of `product_id` in the cart (0 if absent).
    pub fn quantity_of(&self, product_id: &ProductId) -> u32 {
        self.line(product_id).map(|i| i.quantity).unwrap_or(0)
    }

    fn line_mut(&mut self, product_id: &ProductId) -> Option<&mut CartLineItem> {
        self.items.iter_mut().find(|i| &i.product.id == product_id)
    }

    /// Add one unit of `product`.
    ///
    /// Existing line: incremented only while the result stays within
    /// `product.stock_count`; the snapshot is refreshed to `product` when it is.
    /// New line: inserted with quantity 1 unless the product has no stock.
    pub fn add(&mut self, product: &Product) -> CartChange {
        let ceiling = product.stock_count;

        if let Some(line) = self.line_mut(&product.id) {
            let next = match line.quantity.checked_add(1) {
                Some(n) if n <= ceiling => n,
                _ => {
                    tracing::debug!(product_id = %product.id, quantity = line.quantity, ceiling, "add dropped: stock ceiling reached");
                    return CartChange::Unchanged;
                }
            };
            line.product = product.clone();
            line.quantity = next;
            tracing::debug!(product_id = %product.id, quantity = next, "cart line incremented");
            return CartChange::Changed;
        }

        if ceiling == 0 {
            tracing::debug!(product_id = %product.id, "add dropped: product out of stock");
            return CartChange::Unchanged;
        }

        self.items.push(CartLineItem {
            product: product.clone(),
            quantity: 1,
        });
        tracing::debug!(product_id = %product.id, "cart line added");
        CartChange::Changed
    }

    /// Remove the line for `product_id`, if present.
    pub fn remove(&mut self, product_id: &ProductId) -> CartChange {
        let before = self.items.len();
        self.items.retain(|i| &i.product.id != product_id);

        if self.items.len() == before {
            CartChange::Unchanged
        } else {
            tracing::debug!(%product_id, "cart line removed");
            CartChange::Changed
        }
    }

    /// Set the quantity of an existing line, clamped into `[1, stock_count]`.
    pub fn set_quantity(&mut self, product_id: &ProductId, requested: i64) -> CartChange {
        let Some(line) = self.line_mut(product_id) else {
            return CartChange::Unchanged;
        };

        let clamped = clamp_quantity(requested, line.product.stock_count);
        if clamped == line.quantity {
            return CartChange::Unchanged;
        }

        line.quantity = clamped;
        tracing::debug!(%product_id, requested, quantity = clamped, "cart line quantity set");
        CartChange::Changed
    }

    /// Empty the cart.
    pub fn clear(&mut self) -> CartChange {
        if self.items.is_empty() {
            return CartChange::Unchanged;
        }
        self.items.clear();
        tracing::debug!("cart cleared");
        CartChange::Changed
    }

    /// Sum of all quantities (badge count).
    pub fn total_item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Sum of `price * quantity` over all lines.
    pub fn subtotal(&self) -> u64 {
        self.items
            .iter()
            .fold(0u64, |acc, i| acc.saturating_add(i.line_total()))
    }

    pub fn shipping_cost(&self) -> u64 {
        if self.items.is_empty() {
            return 0;
        }
        self.shipping.cost_for(self.subtotal())
    }

    pub fn grand_total(&self) -> u64 {
        self.subtotal().saturating_add(self.shipping_cost())
    }

    /// Amount still needed to qualify for free shipping (0 once it applies).
    pub fn amount_until_free_shipping(&self) -> u64 {
        if self.items.is_empty() {
            return 0;
        }
        self.shipping.remaining_for_free(self.subtotal())
    }
}

/// `max(1, min(requested, stock_count))`.
///
/// A stale snapshot with zero stock still yields 1, so a line never drops to 0.
fn clamp_quantity(requested: i64, stock_count: u32) -> u32 {
    let capped = requested.min(i64::from(stock_count));
    // capped <= u32::MAX here, so the conversion only fails for values below 1.
    u32::try_from(capped.max(1)).unwrap_or(1)
}
