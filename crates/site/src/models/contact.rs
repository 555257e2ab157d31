//! Contact submission domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use solerevive_core::{ContactSubmissionId, Email};

/// A message submitted via the public contact form.
#[derive(Debug, Clone, Serialize)]
pub struct ContactSubmission {
    pub id: ContactSubmissionId,
    pub name: String,
    pub email: Email,
    pub subject: Option<String>,
    pub message: String,
    /// Flips to true the first time an admin opens the message.
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// Fields for creating a contact submission.
#[derive(Debug, Clone)]
pub struct NewContactSubmission {
    pub name: String,
    pub email: Email,
    pub subject: Option<String>,
    pub message: String,
}
