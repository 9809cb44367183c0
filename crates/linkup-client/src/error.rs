//! Error types for the feed client.
//!
//! Every failed action surfaces one of these; nothing is retried.

/// Errors that can occur while the client talks to the feed store.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never produced a response (connection refused, DNS,
    /// reset, ...).
    #[error("transport error: {0}")]
    Transport(String),

    /// The store answered with a non-success status.
    #[error("HTTP error {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// The `message` field of the error body, or the raw body.
        message: String,
    },

    /// A success response could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// The action needs a signed-in identity.
    #[error("not signed in")]
    NotAuthenticated,

    /// The post content or comment text was empty after trimming.
    #[error("{0} must not be empty")]
    EmptyInput(&'static str),

    /// The post is not in the local cache.
    #[error("unknown post {0}")]
    UnknownPost(String),

    /// Configuration is invalid.
    #[error("config error: {0}")]
    Config(String),
}
