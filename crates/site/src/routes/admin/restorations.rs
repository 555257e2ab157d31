//! Admin restoration workflow handlers.

use axum::Json;
use axum::extract::{Path, State};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::instrument;

use solerevive_core::{RestorationRequestId, RestorationStatus};

use crate::db::RestorationRepository;
use crate::error::{AppError, Result};
use crate::models::restoration::RestorationRequest;
use crate::state::AppState;

/// List all restoration requests, newest first.
///
/// GET /api/admin/restorations
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<RestorationRequest>>> {
    let requests = RestorationRepository::new(state.pool()).list_all().await?;
    Ok(Json(requests))
}

/// Request body for a restoration status change.
///
/// `quote` accompanies the move to `quoted`; it is optional everywhere
/// else and a previously stored quote survives updates that omit it.
#[derive(Debug, Deserialize)]
pub struct UpdateRestorationRequest {
    pub status: RestorationStatus,
    #[serde(default)]
    pub quote: Option<Decimal>,
}

/// Move a restoration request through its workflow.
///
/// PUT /api/admin/restorations/{id}
///
/// The transition is checked against the workflow table before anything
/// is written; illegal jumps (e.g., pending straight to completed) are
/// rejected with 422.
#[instrument(skip(state, body), fields(status = %body.status))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<RestorationRequestId>,
    Json(body): Json<UpdateRestorationRequest>,
) -> Result<Json<RestorationRequest>> {
    let repo = RestorationRepository::new(state.pool());

    let current = repo
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("restoration request {id}")))?;

    if !current.status.can_transition_to(body.status) {
        return Err(AppError::InvalidTransition {
            from: current.status,
            to: body.status,
        });
    }

    let updated = repo.update_status(id, body.status, body.quote).await?;

    tracing::info!(
        id = %updated.id,
        request_number = %updated.request_number,
        status = %updated.status,
        "Restoration request updated"
    );

    Ok(Json(updated))
}
