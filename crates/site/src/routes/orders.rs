//! Checkout route handlers.
//!
//! Payment capture happens in the front end's payment provider; by the
//! time checkout posts here the order is already paid or pending payment,
//! so this handler only records it.

use axum::{Json, extract::State, http::StatusCode};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::instrument;

use solerevive_core::Email;

use crate::db::OrderRepository;
use crate::error::{AppError, Result};
use crate::models::order::{NewOrder, Order};
use crate::state::AppState;

/// Checkout submission body.
#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    #[serde(default)]
    pub customer_email: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_phone: Option<String>,
    pub shipping_address: serde_json::Value,
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    #[serde(default)]
    pub payment_id: Option<String>,
    #[serde(default)]
    pub payment_status: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl CheckoutRequest {
    fn validate(self) -> Result<NewOrder> {
        let customer_name = self.customer_name.trim();
        if customer_name.is_empty() || self.customer_email.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Customer name and email are required".to_string(),
            ));
        }

        let customer_email = Email::parse(self.customer_email.trim())
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        Ok(NewOrder {
            customer_email,
            customer_name: customer_name.to_string(),
            customer_phone: self.customer_phone,
            shipping_address: self.shipping_address,
            subtotal: self.subtotal,
            shipping: self.shipping,
            tax: self.tax,
            total: self.total,
            payment_id: self.payment_id,
            payment_status: self.payment_status,
            notes: self.notes,
        })
    }
}

/// Record an order at checkout.
///
/// POST /api/orders
#[instrument(skip(state, body), fields(email = %body.customer_email))]
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CheckoutRequest>,
) -> Result<(StatusCode, Json<Order>)> {
    let order = body.validate()?;

    let created = OrderRepository::new(state.pool()).create(&order).await?;

    tracing::info!(
        id = %created.id,
        order_number = %created.order_number,
        "Order recorded"
    );

    Ok((StatusCode::CREATED, Json(created)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn request(email: &str, name: &str) -> CheckoutRequest {
        CheckoutRequest {
            customer_email: email.to_string(),
            customer_name: name.to_string(),
            customer_phone: None,
            shipping_address: serde_json::json!({"line1": "1 Main St", "city": "Portland"}),
            subtotal: Decimal::new(18999, 2),
            shipping: Decimal::new(1000, 2),
            tax: Decimal::new(1500, 2),
            total: Decimal::new(21499, 2),
            payment_id: None,
            payment_status: None,
            notes: None,
        }
    }

    #[test]
    fn test_missing_customer_name_is_rejected() {
        let err = request("ava@example.com", "").validate().unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_malformed_email_is_rejected() {
        let err = request("not-an-email", "Ava").validate().unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_valid_request_passes() {
        let order = request("ava@example.com", "Ava").validate().unwrap();
        assert_eq!(order.customer_email.as_str(), "ava@example.com");
        assert_eq!(order.total, Decimal::new(21499, 2));
    }
}
