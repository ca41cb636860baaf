//! Checkout: form validation, order assembly, and (simulated) submission.
//!
//! There is no payment processor behind this crate. `place_order` hands the
//! assembled order to an `OrderSubmitter` and clears the cart once it accepts.

pub mod form;
pub mod order;
pub mod submit;

pub use form::{CheckoutForm, PaymentMethod};
pub use order::{Order, OrderStatus, ShippingDetails};
pub use submit::{
    CheckoutError, OrderConfirmation, OrderSubmitter, SimulatedOrderSubmitter, place_order,
};
