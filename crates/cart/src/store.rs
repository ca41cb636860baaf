use storefront_catalog::Product;
use storefront_core::ProductId;

use crate::cart::{Cart, CartChange, CartLineItem};
use crate::persistence::{CartPersistence, HydrationState, PersistError};
use crate::shipping::ShippingPolicy;
use crate::slot::KeyValueStore;

/// Handle through which callers read and mutate the cart.
///
/// Each mutator applies the aggregate operation, then writes the snapshot
/// before returning. A write failure is returned to the caller; the in-memory
/// cart keeps the mutation and the slot keeps its previous value, so the next
/// successful save catches it up.
#[derive(Debug)]
pub struct CartStore<S> {
    cart: Cart,
    persistence: CartPersistence<S>,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Hydrate from `slot` (missing/corrupt snapshots give an empty cart).
    pub fn open(slot: S, shipping: ShippingPolicy) -> Self {
        Self::from_persistence(CartPersistence::new(slot), shipping)
    }

    pub fn from_persistence(mut persistence: CartPersistence<S>, shipping: ShippingPolicy) -> Self {
        let cart = persistence.load(shipping);
        Self { cart, persistence }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn items(&self) -> &[CartLineItem] {
        self.cart.items()
    }

    pub fn hydration_state(&self) -> HydrationState {
        self.persistence.state()
    }

    pub fn add(&mut self, product: &Product) -> Result<CartChange, PersistError> {
        let change = self.cart.add(product);
        self.persist(change)
    }

    pub fn remove(&mut self, product_id: &ProductId) -> Result<CartChange, PersistError> {
        let change = self.cart.remove(product_id);
        self.persist(change)
    }

    pub fn set_quantity(
        &mut self,
        product_id: &ProductId,
        requested: i64,
    ) -> Result<CartChange, PersistError> {
        let change = self.cart.set_quantity(product_id, requested);
        self.persist(change)
    }

    pub fn clear(&mut self) -> Result<CartChange, PersistError> {
        let change = self.cart.clear();
        self.persist(change)
    }

    pub fn total_item_count(&self) -> u64 {
        self.cart.total_item_count()
    }

    pub fn subtotal(&self) -> u64 {
        self.cart.subtotal()
    }

    pub fn shipping_cost(&self) -> u64 {
        self.cart.shipping_cost()
    }

    pub fn grand_total(&self) -> u64 {
        self.cart.grand_total()
    }

    pub fn amount_until_free_shipping(&self) -> u64 {
        self.cart.amount_until_free_shipping()
    }

    // Every mutation writes, including no-ops.
    fn persist(&mut self, change: CartChange) -> Result<CartChange, PersistError> {
        self.persistence.save(&self.cart)?;
        Ok(change)
    }
}
