//! Error types for the data layer.
//!
//! All errors are propagated via [`DbError`], which wraps the underlying
//! [`sqlx`] errors and adds the two domain failures every feed operation
//! can report: an unresolvable post and an invalid payload.

/// Errors that can occur in the data layer.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A `PostgreSQL` operation failed.
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sqlx::Error),

    /// A `PostgreSQL` migration failed.
    #[error("PostgreSQL migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A serialization or deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The requested post does not exist.
    #[error("Post not found: {0}")]
    NotFound(String),

    /// A request payload failed validation.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<validator::ValidationErrors> for DbError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Validation(linkup_types::describe_errors(&errors))
    }
}
