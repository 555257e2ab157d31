//! Contact form route handlers.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use solerevive_core::{ContactSubmissionId, Email};

use crate::db::ContactRepository;
use crate::error::{AppError, Result};
use crate::models::contact::NewContactSubmission;
use crate::state::AppState;

/// Contact form data.
///
/// Fields default to empty so a missing field and a blank field get the
/// same validation error instead of a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: String,
}

impl ContactForm {
    /// Validate the form into a storable submission.
    fn validate(self) -> Result<NewContactSubmission> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();

        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(AppError::BadRequest(
                "Name, email, and message are required".to_string(),
            ));
        }

        let email = Email::parse(email).map_err(|e| AppError::BadRequest(e.to_string()))?;

        Ok(NewContactSubmission {
            name: name.to_string(),
            email,
            subject: self
                .subject
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            message: message.to_string(),
        })
    }
}

/// Response for a stored contact submission.
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub id: ContactSubmissionId,
}

/// Submit the contact form.
///
/// POST /api/contact
#[instrument(skip(state, form), fields(email = %form.email))]
pub async fn submit(
    State(state): State<AppState>,
    Json(form): Json<ContactForm>,
) -> Result<(StatusCode, Json<ContactResponse>)> {
    let submission = form.validate()?;

    let created = ContactRepository::new(state.pool())
        .create(&submission)
        .await?;

    tracing::info!(id = %created.id, "Contact submission stored");

    Ok((
        StatusCode::CREATED,
        Json(ContactResponse {
            success: true,
            id: created.id,
        }),
    ))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            subject: None,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_missing_message_is_rejected() {
        let err = form("Ava", "ava@example.com", "").validate().unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_missing_name_is_rejected() {
        let err = form("  ", "ava@example.com", "Hi there")
            .validate()
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_malformed_email_is_rejected() {
        let err = form("Ava", "not-an-email", "Hi there")
            .validate()
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_valid_form_is_trimmed() {
        let submission = ContactForm {
            name: "  Ava  ".to_string(),
            email: " ava@example.com ".to_string(),
            subject: Some("   ".to_string()),
            message: " Do you restore Jordans? ".to_string(),
        }
        .validate()
        .unwrap();

        assert_eq!(submission.name, "Ava");
        assert_eq!(submission.email.as_str(), "ava@example.com");
        assert!(submission.subject.is_none());
        assert_eq!(submission.message, "Do you restore Jordans?");
    }
}
