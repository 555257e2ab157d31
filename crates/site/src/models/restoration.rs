//! Restoration request domain types.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use solerevive_core::{Email, RestorationRequestId, RestorationStatus};

/// A customer-submitted restoration service ticket.
#[derive(Debug, Clone, Serialize)]
pub struct RestorationRequest {
    pub id: RestorationRequestId,
    /// Human-facing request reference (e.g., `RST-051877`).
    pub request_number: String,
    pub customer_name: String,
    pub email: Email,
    pub phone: Option<String>,
    /// Requested service (e.g., "deep-clean", "full-restoration", "sole-swap").
    pub service_type: String,
    pub sneaker_brand: String,
    pub sneaker_model: String,
    pub size: Option<Decimal>,
    pub description: String,
    pub images: Vec<String>,
    pub status: RestorationStatus,
    /// Price quoted by the shop; set when the request moves to `quoted`.
    pub quote: Option<Decimal>,
    pub estimated_completion: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for creating a restoration request.
///
/// The request number and the initial `pending` status are assigned by
/// the repository.
#[derive(Debug, Clone)]
pub struct NewRestorationRequest {
    pub customer_name: String,
    pub email: Email,
    pub phone: Option<String>,
    pub service_type: String,
    pub sneaker_brand: String,
    pub sneaker_model: String,
    pub size: Option<Decimal>,
    pub description: String,
    pub images: Vec<String>,
}
