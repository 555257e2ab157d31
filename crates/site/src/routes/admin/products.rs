//! Admin product management handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::{Value, json};
use tracing::instrument;

use solerevive_core::ProductId;

use crate::db::ProductRepository;
use crate::error::{AppError, Result};
use crate::models::product::{NewProduct, Product, ProductUpdate};
use crate::state::AppState;

/// List all products, including out-of-stock ones.
///
/// GET /api/admin/products
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = ProductRepository::new(state.pool()).list_all().await?;
    Ok(Json(products))
}

/// Create a product.
///
/// POST /api/admin/products
#[instrument(skip(state, body), fields(name = %body.name, brand = %body.brand))]
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewProduct>,
) -> Result<(StatusCode, Json<Product>)> {
    let created = ProductRepository::new(state.pool()).create(&body).await?;

    tracing::info!(id = %created.id, name = %created.name, "Product created");

    Ok((StatusCode::CREATED, Json(created)))
}

/// Product detail (admin edit form).
///
/// GET /api/admin/products/{id}
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Product>> {
    let product = ProductRepository::new(state.pool())
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    Ok(Json(product))
}

/// Apply a partial update to a product.
///
/// PUT /api/admin/products/{id}
#[instrument(skip(state, body))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    Json(body): Json<ProductUpdate>,
) -> Result<Json<Product>> {
    let updated = ProductRepository::new(state.pool()).update(id, &body).await?;

    tracing::info!(id = %updated.id, "Product updated");

    Ok(Json(updated))
}

/// Delete a product.
///
/// DELETE /api/admin/products/{id}
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Value>> {
    ProductRepository::new(state.pool()).delete(id).await?;

    tracing::info!(%id, "Product deleted");

    Ok(Json(json!({ "success": true })))
}
