//! Error types for the feed server binary.
//!
//! [`StartupError`] is the top-level error that wraps every failure mode
//! between process start and clean shutdown.

/// Invalid or missing environment configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is not set.
    #[error("missing required env var {0}")]
    Missing(String),

    /// A variable is set but cannot be used.
    #[error("{0}")]
    Invalid(String),
}

/// Top-level error for the feed server binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: ConfigError,
    },

    /// Connecting to or migrating the database failed.
    #[error("database error: {source}")]
    Database {
        /// The underlying database error.
        #[from]
        source: linkup_db::DbError,
    },

    /// The HTTP server failed to bind or serve.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: linkup_api::ServerError,
    },
}
