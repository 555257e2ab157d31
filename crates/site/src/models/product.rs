//! Product domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use solerevive_core::{ProductCondition, ProductId};

/// A sneaker listing.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    /// US shoe size (half sizes allowed).
    pub size: Decimal,
    pub price: Decimal,
    pub description: Option<String>,
    pub condition: ProductCondition,
    /// Image URLs; hosting is external.
    pub images: Vec<String>,
    pub category: String,
    pub in_stock: bool,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for creating a product.
///
/// Doubles as the admin create-request body: `images` defaults to empty,
/// `in_stock` to true and `featured` to false when omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub brand: String,
    pub size: Decimal,
    pub price: Decimal,
    #[serde(default)]
    pub description: Option<String>,
    pub condition: ProductCondition,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    #[serde(default)]
    pub featured: bool,
    pub category: String,
}

const fn default_in_stock() -> bool {
    true
}

/// Partial product update; fields left as `None` are unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub size: Option<Decimal>,
    pub price: Option<Decimal>,
    pub description: Option<String>,
    pub condition: Option<ProductCondition>,
    pub images: Option<Vec<String>>,
    pub category: Option<String>,
    pub in_stock: Option<bool>,
    pub featured: Option<bool>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_product_defaults() {
        let product: NewProduct = serde_json::from_str(
            r#"{
                "name": "Air Jordan 1 Retro High",
                "brand": "Nike",
                "size": "10.5",
                "price": "249.99",
                "condition": "restored",
                "category": "basketball"
            }"#,
        )
        .unwrap();

        assert!(product.images.is_empty());
        assert!(product.in_stock);
        assert!(!product.featured);
        assert!(product.description.is_none());
    }

    #[test]
    fn test_product_update_absent_fields_are_none() {
        let update: ProductUpdate = serde_json::from_str(r#"{"in_stock": false}"#).unwrap();

        assert_eq!(update.in_stock, Some(false));
        assert!(update.name.is_none());
        assert!(update.price.is_none());
        assert!(update.featured.is_none());
    }
}
