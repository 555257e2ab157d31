//! Admin contact inbox handlers.

use axum::Json;
use axum::extract::{Path, State};
use serde_json::{Value, json};
use tracing::instrument;

use solerevive_core::ContactSubmissionId;

use crate::db::ContactRepository;
use crate::error::Result;
use crate::models::contact::ContactSubmission;
use crate::state::AppState;

/// List all contact submissions, newest first.
///
/// GET /api/admin/messages
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ContactSubmission>>> {
    let messages = ContactRepository::new(state.pool()).list_all().await?;
    Ok(Json(messages))
}

/// Mark a message as read. Idempotent.
///
/// PUT /api/admin/messages/{id}/read
#[instrument(skip(state))]
pub async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<ContactSubmissionId>,
) -> Result<Json<Value>> {
    ContactRepository::new(state.pool()).mark_read(id).await?;

    Ok(Json(json!({ "success": true })))
}
