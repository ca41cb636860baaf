use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_cart::{Cart, CartLineItem};
use storefront_core::{Entity, OrderId};

use crate::form::{CheckoutForm, PaymentMethod};

/// Order status lifecycle. New orders start `Pending`; later states are set
/// by fulfilment outside this workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

/// Where the order goes and who to call about it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingDetails {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub postal_code: Option<String>,
}

impl From<&CheckoutForm> for ShippingDetails {
    fn from(form: &CheckoutForm) -> Self {
        Self {
            full_name: form.full_name.trim().to_string(),
            email: form.email.trim().to_string(),
            phone: form.phone.trim().to_string(),
            address: form.address.trim().to_string(),
            city: form.city.trim().to_string(),
            postal_code: form.postal_code().map(str::to_string),
        }
    }
}

/// An order assembled from the cart at checkout time.
///
/// Amounts are copied from the cart when the order is built, so later cart
/// changes do not affect it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub items: Vec<CartLineItem>,
    pub subtotal: u64,
    pub shipping_cost: u64,
    pub total_price: u64,
    pub status: OrderStatus,
    pub payment_method: PaymentMethod,
    pub shipping_address: ShippingDetails,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn from_cart(id: OrderId, form: &CheckoutForm, cart: &Cart, now: DateTime<Utc>) -> Self {
        Self {
            id,
            items: cart.items().to_vec(),
            subtotal: cart.subtotal(),
            shipping_cost: cart.shipping_cost(),
            total_price: cart.grand_total(),
            status: OrderStatus::Pending,
            payment_method: form.payment_method,
            shipping_address: ShippingDetails::from(form),
            created_at: now,
        }
    }

    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use storefront_catalog::Product;
    use storefront_core::ProductId;

    use super::*;

    #[test]
    fn order_copies_cart_totals_and_trims_details() {
        let mut cart = Cart::default();
        let p = Product::new(ProductId::new("1").unwrap(), "Kurta", 900, 5);
        cart.add(&p);
        cart.add(&p);

        let form = CheckoutForm {
            full_name: "  Ali Khan ".to_string(),
            email: "ali@example.com".to_string(),
            phone: "03001234567".to_string(),
            address: "House 123, Street 4".to_string(),
            city: "Lahore".to_string(),
            postal_code: Some("".to_string()),
            payment_method: PaymentMethod::Cod,
        };

        let order = Order::from_cart(OrderId::new(), &form, &cart, Utc::now());
        assert_eq!(order.subtotal, 1800);
        assert_eq!(order.shipping_cost, 250);
        assert_eq!(order.total_price, 2050);
        assert_eq!(order.item_count(), 2);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.shipping_address.full_name, "Ali Khan");
        assert_eq!(order.shipping_address.postal_code, None);

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["status"], "pending");
        assert_eq!(json["paymentMethod"], "cod");
    }
}
