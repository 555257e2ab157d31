//! Restoration request repository.

use chrono::{DateTime, NaiveDate, Utc};
use rand::Rng;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use solerevive_core::{Email, RestorationRequestId, RestorationStatus};

use super::{RepositoryError, map_insert_error};
use crate::models::restoration::{NewRestorationRequest, RestorationRequest};

/// Internal row type for `PostgreSQL` restoration request queries.
#[derive(Debug, sqlx::FromRow)]
struct RestorationRow {
    id: Uuid,
    request_number: String,
    customer_name: String,
    email: String,
    phone: Option<String>,
    service_type: String,
    sneaker_brand: String,
    sneaker_model: String,
    size: Option<Decimal>,
    description: String,
    images: Vec<String>,
    status: RestorationStatus,
    quote: Option<Decimal>,
    estimated_completion: Option<NaiveDate>,
    notes: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<RestorationRow> for RestorationRequest {
    type Error = RepositoryError;

    fn try_from(row: RestorationRow) -> Result<Self, Self::Error> {
        let email = Email::parse(&row.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;

        Ok(Self {
            id: RestorationRequestId::new(row.id),
            request_number: row.request_number,
            customer_name: row.customer_name,
            email,
            phone: row.phone,
            service_type: row.service_type,
            sneaker_brand: row.sneaker_brand,
            sneaker_model: row.sneaker_model,
            size: row.size,
            description: row.description,
            images: row.images,
            status: row.status,
            quote: row.quote,
            estimated_completion: row.estimated_completion,
            notes: row.notes,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Generate a human-facing request reference.
///
/// Six random digits, uniqueness enforced by the database.
fn generate_request_number() -> String {
    let n: u32 = rand::rng().random_range(0..1_000_000);
    format!("RST-{n:06}")
}

/// Repository for restoration request database operations.
pub struct RestorationRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RestorationRepository<'a> {
    /// Create a new restoration request repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all restoration requests, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if stored data is invalid.
    pub async fn list_all(&self) -> Result<Vec<RestorationRequest>, RepositoryError> {
        let rows = sqlx::query_as::<_, RestorationRow>(
            r"
            SELECT id, request_number, customer_name, email, phone, service_type,
                   sneaker_brand, sneaker_model, size, description, images, status,
                   quote, estimated_completion, notes, created_at, updated_at
            FROM shop.restoration_request
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Get a restoration request by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if stored data is invalid.
    pub async fn get(
        &self,
        id: RestorationRequestId,
    ) -> Result<Option<RestorationRequest>, RepositoryError> {
        let row = sqlx::query_as::<_, RestorationRow>(
            r"
            SELECT id, request_number, customer_name, email, phone, service_type,
                   sneaker_brand, sneaker_model, size, description, images, status,
                   quote, estimated_completion, notes, created_at, updated_at
            FROM shop.restoration_request
            WHERE id = $1
            ",
        )
        .bind(id.as_uuid())
        .fetch_optional(self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// Create a new restoration request with a generated request number
    /// and `pending` status.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the generated request number
    /// collides. Returns `RepositoryError::Database` for other failures.
    pub async fn create(
        &self,
        request: &NewRestorationRequest,
    ) -> Result<RestorationRequest, RepositoryError> {
        let row = sqlx::query_as::<_, RestorationRow>(
            r"
            INSERT INTO shop.restoration_request
                (request_number, customer_name, email, phone, service_type,
                 sneaker_brand, sneaker_model, size, description, images, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id, request_number, customer_name, email, phone, service_type,
                      sneaker_brand, sneaker_model, size, description, images, status,
                      quote, estimated_completion, notes, created_at, updated_at
            ",
        )
        .bind(generate_request_number())
        .bind(&request.customer_name)
        .bind(request.email.as_str())
        .bind(&request.phone)
        .bind(&request.service_type)
        .bind(&request.sneaker_brand)
        .bind(&request.sneaker_model)
        .bind(request.size)
        .bind(&request.description)
        .bind(&request.images)
        .bind(RestorationStatus::Pending)
        .fetch_one(self.pool)
        .await
        .map_err(|e| map_insert_error(e, "request number"))?;

        row.try_into()
    }

    /// Overwrite a request's status, and its quote when one is provided.
    ///
    /// A `None` quote leaves any previously stored quote untouched, so
    /// moving a quoted request to `approved` keeps the quoted price.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no request has this ID.
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn update_status(
        &self,
        id: RestorationRequestId,
        status: RestorationStatus,
        quote: Option<Decimal>,
    ) -> Result<RestorationRequest, RepositoryError> {
        let row = sqlx::query_as::<_, RestorationRow>(
            r"
            UPDATE shop.restoration_request
            SET status = $2, quote = COALESCE($3, quote), updated_at = now()
            WHERE id = $1
            RETURNING id, request_number, customer_name, email, phone, service_type,
                      sneaker_brand, sneaker_model, size, description, images, status,
                      quote, estimated_completion, notes, created_at, updated_at
            ",
        )
        .bind(id.as_uuid())
        .bind(status)
        .bind(quote)
        .fetch_optional(self.pool)
        .await?;

        row.ok_or(RepositoryError::NotFound)?.try_into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_number_format() {
        let number = generate_request_number();
        assert!(number.starts_with("RST-"));
        assert_eq!(number.len(), 10);
        assert!(number[4..].chars().all(|c| c.is_ascii_digit()));
    }
}
