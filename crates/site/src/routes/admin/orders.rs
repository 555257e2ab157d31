//! Admin order management handlers.

use axum::Json;
use axum::extract::{Path, State};
use serde::Deserialize;
use tracing::instrument;

use solerevive_core::{OrderId, OrderStatus};

use crate::db::OrderRepository;
use crate::error::Result;
use crate::models::order::Order;
use crate::state::AppState;

/// List all orders, newest first.
///
/// GET /api/admin/orders
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Order>>> {
    let orders = OrderRepository::new(state.pool()).list_all().await?;
    Ok(Json(orders))
}

/// Request body for an order status change.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: OrderStatus,
}

/// Overwrite an order's status.
///
/// PUT /api/admin/orders/{id}/status
///
/// Order status carries no transition constraints; the back office moves
/// orders freely between states.
#[instrument(skip(state, body), fields(status = %body.status))]
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
    Json(body): Json<UpdateStatusRequest>,
) -> Result<Json<Order>> {
    let updated = OrderRepository::new(state.pool())
        .update_status(id, body.status)
        .await?;

    tracing::info!(id = %updated.id, status = %updated.status, "Order status updated");

    Ok(Json(updated))
}
