//! Error types for the feed API.
//!
//! [`ApiError`] unifies all failure modes into a single enum that converts
//! into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. Every
//! error body is `{"message": ..., "status": ...}`.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use linkup_db::DbError;

/// Errors that can occur in the feed API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The requested post was not found.
    #[error("{0}")]
    NotFound(String),

    /// A required field was missing or empty.
    #[error("{0}")]
    Validation(String),

    /// The request body was not valid JSON for the endpoint.
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    /// The persistence layer failed.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound(what) => Self::NotFound(format!("{what} not found")),
            DbError::Validation(msg) => Self::Validation(msg),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        }

        let body = serde_json::json!({
            "message": self.to_string(),
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
