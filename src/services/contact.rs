//! Contact-form ingestion: escape, store, report.
//!
//! DESIGN
//! ======
//! A submission is escaped once on receipt and stored as-is, so every later
//! reader of the `messages` table sees HTML-safe text. Storage sits behind
//! [`MessageStore`] so handlers and tests can swap the Postgres store for an
//! in-memory one.
//!
//! ERROR HANDLING
//! ==============
//! Store failures collapse into two categories. [`ContactError::Unavailable`]
//! covers the store being unreachable (I/O, TLS, pool exhaustion or shutdown);
//! everything else is [`ContactError::Rejected`]. Driver detail stays in the
//! error for logging and never reaches the visitor.

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("message store unavailable: {0}")]
    Unavailable(String),
    #[error("message store rejected submission: {0}")]
    Rejected(String),
}

impl ContactError {
    /// Visitor-facing text for this failure category.
    #[must_use]
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::Unavailable(_) => "Erreur : service temporairement indisponible.",
            Self::Rejected(_) => "Erreur : votre message n'a pas pu être enregistré.",
        }
    }
}

impl From<sqlx::Error> for ContactError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => Self::Unavailable(err.to_string()),
            other => Self::Rejected(other.to_string()),
        }
    }
}

/// One escaped submission, ready to store. Mirrors a `messages` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    /// Escape raw form values.
    #[must_use]
    pub fn from_raw(name: &str, email: &str, message: &str) -> Self {
        Self { name: escape_html(name), email: escape_html(email), message: escape_html(message) }
    }

    /// Confirmation shown after a successful insert.
    #[must_use]
    pub fn confirmation(&self) -> String {
        format!("Merci, {}! Votre message a été enregistré.", self.name)
    }
}

/// Replace `& < > " '` with their HTML entities. `&` is always re-encoded,
/// so already-escaped input is escaped again.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

// =============================================================================
// STORE
// =============================================================================

/// Durable sink for contact submissions.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Store one submission as a new row.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError`] when the row was not written.
    async fn insert(&self, submission: &ContactSubmission) -> Result<(), ContactError>;
}

/// `messages` table in Postgres.
pub struct PgMessageStore {
    pool: PgPool,
}

impl PgMessageStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageStore for PgMessageStore {
    async fn insert(&self, submission: &ContactSubmission) -> Result<(), ContactError> {
        sqlx::query("INSERT INTO messages (name, email, message) VALUES ($1, $2, $3)")
            .bind(&submission.name)
            .bind(&submission.email)
            .bind(&submission.message)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// Escape and store one submission, returning what was stored.
///
/// # Errors
///
/// Propagates the store's [`ContactError`].
pub async fn record(
    store: &dyn MessageStore,
    name: &str,
    email: &str,
    message: &str,
) -> Result<ContactSubmission, ContactError> {
    let submission = ContactSubmission::from_raw(name, email, message);
    store.insert(&submission).await?;
    info!(email = %submission.email, bytes = submission.message.len(), "contact message stored");
    Ok(submission)
}
