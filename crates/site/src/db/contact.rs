//! Contact submission repository.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use solerevive_core::{ContactSubmissionId, Email};

use super::RepositoryError;
use crate::models::contact::{ContactSubmission, NewContactSubmission};

/// Internal row type for `PostgreSQL` contact submission queries.
#[derive(Debug, sqlx::FromRow)]
struct ContactRow {
    id: Uuid,
    name: String,
    email: String,
    subject: Option<String>,
    message: String,
    read: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<ContactRow> for ContactSubmission {
    type Error = RepositoryError;

    fn try_from(row: ContactRow) -> Result<Self, Self::Error> {
        let email = Email::parse(&row.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;

        Ok(Self {
            id: ContactSubmissionId::new(row.id),
            name: row.name,
            email,
            subject: row.subject,
            message: row.message,
            read: row.read,
            created_at: row.created_at,
        })
    }
}

/// Repository for contact submission database operations.
pub struct ContactRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ContactRepository<'a> {
    /// Create a new contact submission repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all contact submissions, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if stored data is invalid.
    pub async fn list_all(&self) -> Result<Vec<ContactSubmission>, RepositoryError> {
        let rows = sqlx::query_as::<_, ContactRow>(
            r"
            SELECT id, name, email, subject, message, read, created_at
            FROM shop.contact_submission
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Create a new contact submission (unread).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(
        &self,
        submission: &NewContactSubmission,
    ) -> Result<ContactSubmission, RepositoryError> {
        let row = sqlx::query_as::<_, ContactRow>(
            r"
            INSERT INTO shop.contact_submission (name, email, subject, message)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, subject, message, read, created_at
            ",
        )
        .bind(&submission.name)
        .bind(submission.email.as_str())
        .bind(&submission.subject)
        .bind(&submission.message)
        .fetch_one(self.pool)
        .await?;

        row.try_into()
    }

    /// Mark a submission as read. Idempotent: marking an already-read
    /// submission is a no-op that still succeeds.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no submission has this ID.
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn mark_read(&self, id: ContactSubmissionId) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE shop.contact_submission SET read = TRUE WHERE id = $1")
            .bind(id.as_uuid())
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
