//! Product repository for catalog database operations.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use solerevive_core::{ProductCondition, ProductId};

use super::RepositoryError;
use crate::models::product::{NewProduct, Product, ProductUpdate};

/// The featured carousel never shows more than this many products.
const FEATURED_LIMIT: i64 = 8;

/// Internal row type for `PostgreSQL` product queries.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: Uuid,
    name: String,
    brand: String,
    size: Decimal,
    price: Decimal,
    description: Option<String>,
    condition: ProductCondition,
    images: Vec<String>,
    category: String,
    in_stock: bool,
    featured: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: ProductId::new(row.id),
            name: row.name,
            brand: row.brand,
            size: row.size,
            price: row.price,
            description: row.description,
            condition: row.condition,
            images: row.images,
            category: row.category,
            in_stock: row.in_stock,
            featured: row.featured,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all products, newest first (admin view).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r"
            SELECT id, name, brand, size, price, description, condition,
                   images, category, in_stock, featured, created_at, updated_at
            FROM shop.product
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// List in-stock products, newest first (customer view).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_in_stock(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r"
            SELECT id, name, brand, size, price, description, condition,
                   images, category, in_stock, featured, created_at, updated_at
            FROM shop.product
            WHERE in_stock
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// List featured, in-stock products, capped at eight.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_featured(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r"
            SELECT id, name, brand, size, price, description, condition,
                   images, category, in_stock, featured, created_at, updated_at
            FROM shop.product
            WHERE featured AND in_stock
            ORDER BY created_at DESC
            LIMIT $1
            ",
        )
        .bind(FEATURED_LIMIT)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Get a product by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r"
            SELECT id, name, brand, size, price, description, condition,
                   images, category, in_stock, featured, created_at, updated_at
            FROM shop.product
            WHERE id = $1
            ",
        )
        .bind(id.as_uuid())
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    /// Create a new product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r"
            INSERT INTO shop.product
                (name, brand, size, price, description, condition,
                 images, category, in_stock, featured)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id, name, brand, size, price, description, condition,
                      images, category, in_stock, featured, created_at, updated_at
            ",
        )
        .bind(&product.name)
        .bind(&product.brand)
        .bind(product.size)
        .bind(product.price)
        .bind(&product.description)
        .bind(product.condition)
        .bind(&product.images)
        .bind(&product.category)
        .bind(product.in_stock)
        .bind(product.featured)
        .fetch_one(self.pool)
        .await?;

        Ok(row.into())
    }

    /// Apply a partial update to a product; `None` fields are unchanged.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no product has this ID.
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn update(
        &self,
        id: ProductId,
        update: &ProductUpdate,
    ) -> Result<Product, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r"
            UPDATE shop.product
            SET name = COALESCE($2, name),
                brand = COALESCE($3, brand),
                size = COALESCE($4, size),
                price = COALESCE($5, price),
                description = COALESCE($6, description),
                condition = COALESCE($7, condition),
                images = COALESCE($8, images),
                category = COALESCE($9, category),
                in_stock = COALESCE($10, in_stock),
                featured = COALESCE($11, featured),
                updated_at = now()
            WHERE id = $1
            RETURNING id, name, brand, size, price, description, condition,
                      images, category, in_stock, featured, created_at, updated_at
            ",
        )
        .bind(id.as_uuid())
        .bind(&update.name)
        .bind(&update.brand)
        .bind(update.size)
        .bind(update.price)
        .bind(&update.description)
        .bind(update.condition)
        .bind(&update.images)
        .bind(&update.category)
        .bind(update.in_stock)
        .bind(update.featured)
        .fetch_optional(self.pool)
        .await?;

        row.map(Into::into).ok_or(RepositoryError::NotFound)
    }

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no product has this ID.
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM shop.product WHERE id = $1")
            .bind(id.as_uuid())
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
