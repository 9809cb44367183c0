//! In-memory post storage.
//!
//! Backs the feed in tests and local development. Posts live in a
//! [`BTreeMap`] behind a [`RwLock`]; every mutation happens under the write
//! lock, so unlike the `PostgreSQL` backend its read-modify-write sequences
//! never interleave.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use linkup_types::{NewPost, Post, PostId};
use tokio::sync::RwLock;

/// Shared in-memory post map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    posts: Arc<RwLock<BTreeMap<PostId, Post>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return every post, newest first (ties broken by id).
    pub async fn list_all(&self) -> Vec<Post> {
        let posts = self.posts.read().await;
        let mut all: Vec<Post> = posts.values().cloned().collect();
        all.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then_with(|| b.id.cmp(&a.id)));
        all
    }

    /// Fetch a single post.
    pub async fn fetch(&self, id: PostId) -> Option<Post> {
        self.posts.read().await.get(&id).cloned()
    }

    /// Insert a new post stamped with the current time.
    pub async fn insert(&self, id: PostId, request: NewPost) -> Post {
        let post = Post::from_request(id, request, Utc::now());
        self.posts.write().await.insert(id, post.clone());
        post
    }

    /// Apply `mutate` to the stored post and return the updated copy.
    ///
    /// Returns `None` without calling `mutate` if the post does not exist.
    pub async fn update<F>(&self, id: PostId, mutate: F) -> Option<Post>
    where
        F: FnOnce(&mut Post),
    {
        let mut posts = self.posts.write().await;
        let post = posts.get_mut(&id)?;
        mutate(post);
        Some(post.clone())
    }

    /// Number of stored posts.
    pub async fn len(&self) -> usize {
        self.posts.read().await.len()
    }

    /// Whether the store holds no posts.
    pub async fn is_empty(&self) -> bool {
        self.posts.read().await.is_empty()
    }
}
