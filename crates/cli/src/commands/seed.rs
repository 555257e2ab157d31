//! Seed the catalog with sample data for local development.

use rust_decimal::Decimal;
use secrecy::SecretString;
use thiserror::Error;

use solerevive_core::ProductCondition;
use solerevive_site::db::{self, ProductRepository, RepositoryError};
use solerevive_site::models::product::NewProduct;

/// Errors that can occur while seeding.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Insert a handful of sample products through the repository layer.
///
/// # Errors
///
/// Returns an error if the database is unreachable or an insert fails.
pub async fn run() -> Result<(), SeedError> {
    dotenvy::dotenv().ok();

    let database_url: SecretString = std::env::var("SITE_DATABASE_URL")
        .map_err(|_| SeedError::MissingEnvVar("SITE_DATABASE_URL"))?
        .into();

    let pool = db::create_pool(&database_url).await?;
    let repo = ProductRepository::new(&pool);

    for product in sample_products() {
        let created = repo.create(&product).await?;
        tracing::info!(id = %created.id, name = %created.name, "Seeded product");
    }

    tracing::info!("Seeding complete");
    Ok(())
}

fn sample_products() -> Vec<NewProduct> {
    vec![
        NewProduct {
            name: "Air Jordan 1 Retro High OG Chicago".to_string(),
            brand: "Nike".to_string(),
            size: Decimal::new(105, 1),
            price: Decimal::new(32500, 2),
            description: Some("Full restoration: new midsole paint, deep-cleaned uppers".to_string()),
            condition: ProductCondition::Restored,
            images: vec![],
            in_stock: true,
            featured: true,
            category: "basketball".to_string(),
        },
        NewProduct {
            name: "Air Force 1 '07 Triple White".to_string(),
            brand: "Nike".to_string(),
            size: Decimal::new(95, 1),
            price: Decimal::new(11000, 2),
            description: None,
            condition: ProductCondition::New,
            images: vec![],
            in_stock: true,
            featured: false,
            category: "lifestyle".to_string(),
        },
        NewProduct {
            name: "990v5 Grey".to_string(),
            brand: "New Balance".to_string(),
            size: Decimal::new(110, 1),
            price: Decimal::new(14500, 2),
            description: Some("Worn twice, original box included".to_string()),
            condition: ProductCondition::Used,
            images: vec![],
            in_stock: true,
            featured: true,
            category: "running".to_string(),
        },
        NewProduct {
            name: "Dunk Low Panda".to_string(),
            brand: "Nike".to_string(),
            size: Decimal::new(80, 1),
            price: Decimal::new(12999, 2),
            description: None,
            condition: ProductCondition::Used,
            images: vec![],
            in_stock: false,
            featured: false,
            category: "lifestyle".to_string(),
        },
    ]
}
