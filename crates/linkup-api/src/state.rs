//! Shared application state for the feed API.

use linkup_db::FeedStore;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`](std::sync::Arc) and injected via Axum's `State`
/// extractor. Holds no post data itself; every request goes to the store.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The post store serving every request.
    pub store: FeedStore,
}

impl AppState {
    /// Create application state around a store.
    pub const fn new(store: FeedStore) -> Self {
        Self { store }
    }

    /// Application state backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(FeedStore::in_memory())
    }
}
