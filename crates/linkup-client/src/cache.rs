//! Local post cache.
//!
//! The client keeps every post it has seen keyed by id. A refresh replaces
//! the whole cache; like and comment responses replace a single entry. All
//! views are derived from the cache, never from partial local edits.

use std::cmp::Ordering;
use std::collections::HashMap;

use linkup_types::{Comment, Post, PostId, UserId};

/// Posts known to the client, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct PostCache {
    posts: HashMap<PostId, Post>,
}

impl PostCache {
    /// An empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire cache with a fresh listing.
    pub fn replace_all(&mut self, posts: Vec<Post>) {
        self.posts = posts.into_iter().map(|post| (post.id, post)).collect();
    }

    /// Insert or replace one post with the store's authoritative copy.
    pub fn upsert(&mut self, post: Post) {
        self.posts.insert(post.id, post);
    }

    /// Look up a cached post.
    pub fn get(&self, id: &PostId) -> Option<&Post> {
        self.posts.get(id)
    }

    /// Drop everything.
    pub fn clear(&mut self) {
        self.posts.clear();
    }

    /// Number of cached posts.
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Every cached post, newest first.
    pub fn feed(&self) -> Vec<&Post> {
        let mut posts: Vec<&Post> = self.posts.values().collect();
        posts.sort_by(|a, b| newest_first(a, b));
        posts
    }

    /// Posts written by `user`, newest first.
    pub fn authored_by(&self, user: &UserId) -> Vec<&Post> {
        let mut posts: Vec<&Post> = self
            .posts
            .values()
            .filter(|post| &post.user_id == user)
            .collect();
        posts.sort_by(|a, b| newest_first(a, b));
        posts
    }

    /// A post's comments, oldest first.
    ///
    /// Comments with equal timestamps keep their append order.
    pub fn comments_oldest_first(&self, id: &PostId) -> Option<Vec<&Comment>> {
        self.posts.get(id).map(|post| {
            let mut comments: Vec<&Comment> = post.comments.iter().collect();
            comments.sort_by_key(|comment| comment.timestamp);
            comments
        })
    }
}

/// Descending timestamp, ties broken by descending id.
fn newest_first(a: &Post, b: &Post) -> Ordering {
    b.timestamp
        .cmp(&a.timestamp)
        .then_with(|| b.id.cmp(&a.id))
}
