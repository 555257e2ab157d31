//! Database operations for the `shop` `PostgreSQL` schema.
//!
//! # Tables
//!
//! - `shop.product` - Sneaker catalog
//! - `shop.customer_order` - Orders created at checkout
//! - `shop.restoration_request` - Restoration service tickets
//! - `shop.contact_submission` - Contact form inbox
//!
//! Each entity module follows the same shape: a private row type deriving
//! `sqlx::FromRow`, a conversion into the domain type, and a borrowed
//! repository over the pool. Queries use the runtime API, so the workspace
//! builds without a live database.
//!
//! # Migrations
//!
//! Migrations are stored in `crates/site/migrations/` and run via:
//! ```bash
//! cargo run -p solerevive-cli -- migrate
//! ```

pub mod contact;
pub mod orders;
pub mod products;
pub mod restorations;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use contact::ContactRepository;
pub use orders::OrderRepository;
pub use products::ProductRepository;
pub use restorations::RestorationRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., duplicate order number).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

/// Map an insert error, surfacing unique violations as conflicts.
fn map_insert_error(err: sqlx::Error, what: &str) -> RepositoryError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            RepositoryError::Conflict(format!("{what} already exists"))
        }
        _ => RepositoryError::Database(err),
    }
}
