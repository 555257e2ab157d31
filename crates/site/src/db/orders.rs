//! Order repository for checkout and back-office database operations.

use chrono::{DateTime, Utc};
use rand::Rng;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use solerevive_core::{Email, OrderId, OrderStatus};

use super::{RepositoryError, map_insert_error};
use crate::models::order::{NewOrder, Order};

/// Internal row type for `PostgreSQL` order queries.
#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    id: Uuid,
    order_number: String,
    customer_email: String,
    customer_name: String,
    customer_phone: Option<String>,
    shipping_address: serde_json::Value,
    status: OrderStatus,
    subtotal: Decimal,
    shipping: Decimal,
    tax: Decimal,
    total: Decimal,
    payment_id: Option<String>,
    payment_status: Option<String>,
    notes: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<OrderRow> for Order {
    type Error = RepositoryError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        let customer_email = Email::parse(&row.customer_email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;

        Ok(Self {
            id: OrderId::new(row.id),
            order_number: row.order_number,
            customer_email,
            customer_name: row.customer_name,
            customer_phone: row.customer_phone,
            shipping_address: row.shipping_address,
            status: row.status,
            subtotal: row.subtotal,
            shipping: row.shipping,
            tax: row.tax,
            total: row.total,
            payment_id: row.payment_id,
            payment_status: row.payment_status,
            notes: row.notes,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Generate a human-facing order reference.
///
/// Six random digits, uniqueness enforced by the database.
fn generate_order_number() -> String {
    let n: u32 = rand::rng().random_range(0..1_000_000);
    format!("ORD-{n:06}")
}

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if stored data is invalid.
    pub async fn list_all(&self) -> Result<Vec<Order>, RepositoryError> {
        let rows = sqlx::query_as::<_, OrderRow>(
            r"
            SELECT id, order_number, customer_email, customer_name, customer_phone,
                   shipping_address, status, subtotal, shipping, tax, total,
                   payment_id, payment_status, notes, created_at, updated_at
            FROM shop.customer_order
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Get an order by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if stored data is invalid.
    pub async fn get(&self, id: OrderId) -> Result<Option<Order>, RepositoryError> {
        let row = sqlx::query_as::<_, OrderRow>(
            r"
            SELECT id, order_number, customer_email, customer_name, customer_phone,
                   shipping_address, status, subtotal, shipping, tax, total,
                   payment_id, payment_status, notes, created_at, updated_at
            FROM shop.customer_order
            WHERE id = $1
            ",
        )
        .bind(id.as_uuid())
        .fetch_optional(self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// Create a new order with a generated order number and `pending` status.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the generated order number
    /// collides. Returns `RepositoryError::Database` for other failures.
    pub async fn create(&self, order: &NewOrder) -> Result<Order, RepositoryError> {
        let row = sqlx::query_as::<_, OrderRow>(
            r"
            INSERT INTO shop.customer_order
                (order_number, customer_email, customer_name, customer_phone,
                 shipping_address, status, subtotal, shipping, tax, total,
                 payment_id, payment_status, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING id, order_number, customer_email, customer_name, customer_phone,
                      shipping_address, status, subtotal, shipping, tax, total,
                      payment_id, payment_status, notes, created_at, updated_at
            ",
        )
        .bind(generate_order_number())
        .bind(order.customer_email.as_str())
        .bind(&order.customer_name)
        .bind(&order.customer_phone)
        .bind(&order.shipping_address)
        .bind(OrderStatus::Pending)
        .bind(order.subtotal)
        .bind(order.shipping)
        .bind(order.tax)
        .bind(order.total)
        .bind(&order.payment_id)
        .bind(&order.payment_status)
        .bind(&order.notes)
        .fetch_one(self.pool)
        .await
        .map_err(|e| map_insert_error(e, "order number"))?;

        row.try_into()
    }

    /// Overwrite an order's status.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no order has this ID.
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn update_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Order, RepositoryError> {
        let row = sqlx::query_as::<_, OrderRow>(
            r"
            UPDATE shop.customer_order
            SET status = $2, updated_at = now()
            WHERE id = $1
            RETURNING id, order_number, customer_email, customer_name, customer_phone,
                      shipping_address, status, subtotal, shipping, tax, total,
                      payment_id, payment_status, notes, created_at, updated_at
            ",
        )
        .bind(id.as_uuid())
        .bind(status)
        .fetch_optional(self.pool)
        .await?;

        row.ok_or(RepositoryError::NotFound)?.try_into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_number_format() {
        let number = generate_order_number();
        assert!(number.starts_with("ORD-"));
        assert_eq!(number.len(), 10);
        assert!(number[4..].chars().all(|c| c.is_ascii_digit()));
    }
}
