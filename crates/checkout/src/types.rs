//! Wire DTOs for the order/payment service.
//!
//! Field names match the collaborator's API exactly; do not rename without
//! coordinating a service-side change.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use forgestore_cart::{Cart, CartLine};
use forgestore_core::ProductId;

/// One order line as the payment service expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl From<&CartLine> for OrderItem {
    fn from(line: &CartLine) -> Self {
        Self {
            product_id: line.product_id,
            quantity: line.quantity,
        }
    }
}

/// Project a cart into the payload for `create_order`.
pub fn order_items(cart: &Cart) -> Vec<OrderItem> {
    cart.lines().iter().map(OrderItem::from).collect()
}

/// Body of `POST /api/orders/create/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub items: Vec<OrderItem>,
}

/// Reference to an order awaiting payment, as issued by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderRef(pub String);

impl core::fmt::Display for OrderRef {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Response of `POST /api/orders/create/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderResponse {
    pub payment_intent_id: OrderRef,
}

/// Body of `POST /api/process/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessPaymentRequest {
    pub payment_intent_id: OrderRef,
    pub payment_method_id: String,
}

/// Response of `POST /api/process/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentConfirmation {
    pub status: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
