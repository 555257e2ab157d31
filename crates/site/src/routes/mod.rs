//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                          - Liveness check
//! GET  /health/ready                    - Readiness check (database)
//!
//! # Public API
//! GET  /api/products                    - In-stock products, newest first
//! GET  /api/products/featured           - Featured in-stock products (max 8)
//! GET  /api/products/{id}               - Product detail
//! POST /api/orders                      - Checkout submission
//! POST /api/restorations                - Restoration request form
//! POST /api/contact                     - Contact form
//!
//! # Admin API
//! GET    /api/admin/products            - All products
//! POST   /api/admin/products            - Create product
//! GET    /api/admin/products/{id}       - Product detail
//! PUT    /api/admin/products/{id}       - Partial update
//! DELETE /api/admin/products/{id}       - Delete product
//! GET    /api/admin/orders              - All orders
//! PUT    /api/admin/orders/{id}/status  - Overwrite order status
//! GET    /api/admin/restorations        - All restoration requests
//! PUT    /api/admin/restorations/{id}   - Update status (and quote)
//! GET    /api/admin/messages            - All contact submissions
//! PUT    /api/admin/messages/{id}/read  - Mark message as read
//! ```

pub mod admin;
pub mod contact;
pub mod orders;
pub mod products;
pub mod restorations;

use axum::extract::State;
use axum::http::StatusCode;
use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Build the site router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .route("/api/products", get(products::list))
        .route("/api/products/featured", get(products::featured))
        .route("/api/products/{id}", get(products::show))
        .route("/api/orders", post(orders::create))
        .route("/api/restorations", post(restorations::create))
        .route("/api/contact", post(contact::submit))
        .nest("/api/admin", admin::router())
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies database connectivity before returning OK.
/// Returns 503 Service Unavailable if the database is not reachable.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match sqlx::query("SELECT 1").fetch_one(state.pool()).await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
