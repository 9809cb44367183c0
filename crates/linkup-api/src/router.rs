//! Axum router construction for the feed API.
//!
//! Assembles all routes into a single [`Router`] with CORS and request
//! tracing middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the feed server.
///
/// The router includes:
/// - `GET /api/posts` -- list posts, newest first
/// - `POST /api/posts` -- create a post
/// - `POST /api/posts/{id}/like` -- toggle a like
/// - `POST /api/posts/{id}/comment` -- append a comment
///
/// CORS allows any origin so the browser client can be served from
/// anywhere.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/posts", get(handlers::list_posts).post(handlers::create_post))
        .route("/posts/{id}/like", post(handlers::toggle_like))
        .route("/posts/{id}/comment", post(handlers::add_comment));

    Router::new()
        .nest("/api", api)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
