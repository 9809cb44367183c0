//! REST API endpoint handlers for the feed.
//!
//! Handlers are thin: they extract the path and body, delegate to
//! [`FeedStore`](linkup_db::FeedStore), and pick the success status. All
//! failures become an [`ApiError`].
//!
//! # Endpoints
//!
//! | Method | Path | Success |
//! |--------|------|---------|
//! | `GET` | `/api/posts` | `200`, posts newest first |
//! | `POST` | `/api/posts` | `201`, created post |
//! | `POST` | `/api/posts/{id}/like` | `200`, updated post |
//! | `POST` | `/api/posts/{id}/comment` | `201`, updated post |

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use linkup_types::{LikeRequest, NewComment, NewPost, PostId};

use crate::error::ApiError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /api/posts
// ---------------------------------------------------------------------------

/// List every post, newest first.
pub async fn list_posts(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let posts = state.store.list_posts().await?;
    Ok(Json(posts))
}

// ---------------------------------------------------------------------------
// POST /api/posts
// ---------------------------------------------------------------------------

/// Create a post from the author fields and content.
pub async fn create_post(
    State(state): State<Arc<AppState>>,
    body: Result<Json<NewPost>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = body?;
    let post = state.store.create_post(request).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

// ---------------------------------------------------------------------------
// POST /api/posts/{id}/like
// ---------------------------------------------------------------------------

/// Toggle the caller's like on a post.
pub async fn toggle_like(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
    body: Result<Json<LikeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_post_id(&id_str)?;
    let Json(request) = body?;
    let post = state.store.toggle_like(id, request).await?;
    Ok(Json(post))
}

// ---------------------------------------------------------------------------
// POST /api/posts/{id}/comment
// ---------------------------------------------------------------------------

/// Append a comment to a post.
pub async fn add_comment(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
    body: Result<Json<NewComment>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_post_id(&id_str)?;
    let Json(request) = body?;
    let post = state.store.add_comment(id, request).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a post id from the path.
///
/// A malformed id can never resolve to a post, so it is reported as
/// not-found rather than as a bad request.
fn parse_post_id(s: &str) -> Result<PostId, ApiError> {
    s.parse::<PostId>()
        .map_err(|e| ApiError::NotFound(format!("post {s} not found ({e})")))
}
