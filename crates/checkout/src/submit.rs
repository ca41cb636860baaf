use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use storefront_cart::{CartStore, KeyValueStore};
use storefront_core::{OrderId, ValidationErrors};

use crate::form::CheckoutForm;
use crate::order::Order;

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("cart is empty")]
    EmptyCart,

    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("order submission failed: {0}")]
    Submission(String),
}

/// Receipt handed back once an order is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    pub order_id: OrderId,
    pub total_price: u64,
    pub message: String,
}

/// Downstream order-submission step.
pub trait OrderSubmitter: Send + Sync {
    fn submit(&self, order: &Order) -> Result<OrderConfirmation, CheckoutError>;
}

/// Accepts every order without talking to any payment or fulfilment system.
///
/// Accepted orders are logged and kept in memory. `failing` builds one that
/// rejects everything, for exercising the error path.
#[derive(Debug, Default)]
pub struct SimulatedOrderSubmitter {
    reject_with: Option<String>,
    accepted: Mutex<Vec<Order>>,
}

impl SimulatedOrderSubmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            reject_with: Some(reason.into()),
            accepted: Mutex::new(Vec::new()),
        }
    }

    /// Orders accepted so far, oldest first.
    pub fn accepted(&self) -> Vec<Order> {
        match self.accepted.lock() {
            Ok(orders) => orders.clone(),
            Err(_) => vec![],
        }
    }
}

impl OrderSubmitter for SimulatedOrderSubmitter {
    fn submit(&self, order: &Order) -> Result<OrderConfirmation, CheckoutError> {
        if let Some(reason) = &self.reject_with {
            tracing::warn!(order_id = %order.id, "order rejected: {reason}");
            return Err(CheckoutError::Submission(reason.clone()));
        }

        tracing::info!(
            order_id = %order.id,
            items = order.item_count(),
            total = order.total_price,
            payment_method = ?order.payment_method,
            "order submitted"
        );

        self.accepted
            .lock()
            .map_err(|_| CheckoutError::Submission("submitter lock poisoned".to_string()))?
            .push(order.clone());

        Ok(OrderConfirmation {
            order_id: order.id,
            total_price: order.total_price,
            message: "Order placed successfully".to_string(),
        })
    }
}

/// Validate the form, build an order from the cart, submit it, and clear the
/// cart once the submitter accepts.
///
/// The cart is left untouched when anything before acceptance fails. If
/// clearing cannot be persisted the order still stands: the error is logged
/// and the in-memory cart is already empty, so the next save overwrites the
/// stale snapshot.
pub fn place_order<S, O>(
    store: &mut CartStore<S>,
    form: &CheckoutForm,
    submitter: &O,
    now: DateTime<Utc>,
) -> Result<OrderConfirmation, CheckoutError>
where
    S: KeyValueStore,
    O: OrderSubmitter + ?Sized,
{
    if store.cart().is_empty() {
        return Err(CheckoutError::EmptyCart);
    }
    form.validate()?;

    let order = Order::from_cart(OrderId::new(), form, store.cart(), now);
    let confirmation = submitter.submit(&order)?;

    if let Err(e) = store.clear() {
        tracing::error!(order_id = %order.id, "order placed but cleared cart was not saved: {e}");
    }

    Ok(confirmation)
}
