//! Order domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use solerevive_core::{Email, OrderId, OrderStatus};

/// A customer order.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    pub id: OrderId,
    /// Human-facing order reference (e.g., `ORD-104233`).
    pub order_number: String,
    pub customer_email: Email,
    pub customer_name: String,
    pub customer_phone: Option<String>,
    /// Free-form shipping address as submitted by checkout.
    pub shipping_address: serde_json::Value,
    pub status: OrderStatus,
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    pub payment_id: Option<String>,
    pub payment_status: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for creating an order at checkout.
///
/// The order number and the initial `pending` status are assigned by the
/// repository, not the caller.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub customer_email: Email,
    pub customer_name: String,
    pub customer_phone: Option<String>,
    pub shipping_address: serde_json::Value,
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    pub payment_id: Option<String>,
    pub payment_status: Option<String>,
    pub notes: Option<String>,
}
