//! HTTP API for the LinkUp feed store.
//!
//! This crate provides an Axum HTTP server exposing the four feed
//! operations under `/api`:
//!
//! - `GET /api/posts` -- every post, newest first
//! - `POST /api/posts` -- create a post (`201`)
//! - `POST /api/posts/{id}/like` -- toggle a like
//! - `POST /api/posts/{id}/comment` -- append a comment (`201`)
//!
//! # Architecture
//!
//! Handlers hold no state of their own. Each request is delegated to the
//! [`FeedStore`](linkup_db::FeedStore) in [`AppState`], and each store
//! error is mapped to a JSON error body with a `message` field:
//! not-found is `404`, validation and malformed bodies are `400`, and
//! persistence failures are `500`.

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{ServerConfig, ServerError, serve, shutdown_signal, start_server};
pub use state::AppState;
