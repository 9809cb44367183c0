//! The feed store: list, create, toggle-like and append-comment.
//!
//! [`FeedStore`] is an enum over the concrete backends instead of a trait
//! object, since async methods are not dyn-compatible. Every operation
//! normalizes and validates its payload, assigns server-side values (id,
//! timestamps), and returns the full post as stored.
//!
//! # Accepted race
//!
//! On `PostgreSQL`, toggle-like and append-comment read the post, mutate it
//! in memory, and write the whole liker set or comment sequence back with no
//! row lock. Two concurrent mutations of the same post can therefore lose
//! one of the updates. This is accepted behavior, not a guarantee.

use chrono::Utc;
use linkup_types::{Comment, LikeRequest, NewComment, NewPost, Post, PostId, UserId};
use validator::Validate;

use crate::error::DbError;
use crate::memory::MemoryStore;
use crate::post_store::PostStore;
use crate::postgres::PostgresPool;

/// A feed store backed by either `PostgreSQL` or process memory.
#[derive(Debug, Clone)]
pub enum FeedStore {
    /// Durable storage in `PostgreSQL`.
    Postgres(PostgresPool),
    /// Volatile storage for tests and local runs.
    Memory(MemoryStore),
}

impl FeedStore {
    /// A fresh, empty in-memory store.
    pub fn in_memory() -> Self {
        Self::Memory(MemoryStore::new())
    }

    /// Human-readable backend name for logging.
    pub const fn backend_name(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Memory(_) => "memory",
        }
    }

    /// Return every post ordered by creation time, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the backend is unreachable.
    pub async fn list_posts(&self) -> Result<Vec<Post>, DbError> {
        let posts = match self {
            Self::Postgres(pool) => PostStore::new(pool.pool()).list_all().await?,
            Self::Memory(store) => store.list_all().await,
        };
        tracing::debug!(count = posts.len(), "Listed posts");
        Ok(posts)
    }

    /// Create a post with no likes and no comments.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Validation`] if the author id, author name or
    /// content is missing, and [`DbError::Postgres`] if the insert fails.
    /// Nothing is stored when validation fails.
    pub async fn create_post(&self, request: NewPost) -> Result<Post, DbError> {
        let request = request.normalized();
        request.validate()?;

        let id = PostId::new();
        let post = match self {
            Self::Postgres(pool) => PostStore::new(pool.pool()).insert(id, &request).await?,
            Self::Memory(store) => store.insert(id, request).await,
        };

        tracing::info!(post_id = %post.id, user_id = %post.user_id, "Post created");
        Ok(post)
    }

    /// Flip `request.user_id`'s like on a post.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::NotFound`] if the post does not exist (checked
    /// before the payload), [`DbError::Validation`] if the user id is
    /// missing, and [`DbError::Postgres`] on backend failure.
    pub async fn toggle_like(&self, id: PostId, request: LikeRequest) -> Result<Post, DbError> {
        let post = self.resolve(id).await?;

        let request = request.normalized();
        request.validate()?;
        let user = UserId(request.user_id);

        let updated = match self {
            Self::Postgres(pool) => {
                let mut post = post;
                post.toggle_like(&user);
                PostStore::new(pool.pool())
                    .replace_likes(id, &post.likes)
                    .await?
            }
            Self::Memory(store) => {
                store
                    .update(id, |post| {
                        post.toggle_like(&user);
                    })
                    .await
            }
        }
        .ok_or_else(|| not_found(id))?;

        tracing::info!(
            post_id = %id,
            user_id = %user,
            liked = updated.is_liked_by(&user),
            likes = updated.like_count(),
            "Like toggled"
        );
        Ok(updated)
    }

    /// Append a comment to a post.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::NotFound`] if the post does not exist (checked
    /// before the payload), [`DbError::Validation`] if the author id,
    /// author name or text is missing, and [`DbError::Postgres`] on backend
    /// failure.
    pub async fn add_comment(&self, id: PostId, request: NewComment) -> Result<Post, DbError> {
        let post = self.resolve(id).await?;

        let request = request.normalized();
        request.validate()?;
        let comment = Comment::from_request(request, Utc::now());

        let updated = match self {
            Self::Postgres(pool) => {
                let mut post = post;
                post.push_comment(comment);
                PostStore::new(pool.pool())
                    .replace_comments(id, &post.comments)
                    .await?
            }
            Self::Memory(store) => store.update(id, |post| post.push_comment(comment)).await,
        }
        .ok_or_else(|| not_found(id))?;

        tracing::info!(
            post_id = %id,
            comments = updated.comment_count(),
            "Comment added"
        );
        Ok(updated)
    }

    /// Load a post or fail with [`DbError::NotFound`].
    async fn resolve(&self, id: PostId) -> Result<Post, DbError> {
        let post = match self {
            Self::Postgres(pool) => PostStore::new(pool.pool()).fetch(id).await?,
            Self::Memory(store) => store.fetch(id).await,
        };
        post.ok_or_else(|| not_found(id))
    }
}

fn not_found(id: PostId) -> DbError {
    DbError::NotFound(format!("post {id}"))
}
