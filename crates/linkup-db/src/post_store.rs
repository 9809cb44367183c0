//! Post persistence in `PostgreSQL`.
//!
//! One row per post. Likes and comments are JSONB arrays on the row and are
//! always rewritten whole; nothing here updates them element-wise.
//!
//! The creation timestamp comes from the database clock (`DEFAULT now()`),
//! so every post in the table is ordered by a single time source.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use linkup_types::{Comment, NewPost, Post, PostId, UserId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DbError;

/// Columns selected for every post query, in [`PostRow`] order.
const POST_COLUMNS: &str =
    "id, user_id, user_name, user_title, user_avatar, content, likes, comments, created_at";

/// Operations on the `posts` table.
pub struct PostStore<'a> {
    pool: &'a PgPool,
}

impl<'a> PostStore<'a> {
    /// Create a new post store bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Return every post, newest first.
    ///
    /// Ties on `created_at` are broken by id, which is time-ordered.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails, or
    /// [`DbError::Serialization`] if a stored document is malformed.
    pub async fn list_all(&self) -> Result<Vec<Post>, DbError> {
        let rows = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(Post::try_from).collect()
    }

    /// Fetch a single post.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn fetch(&self, id: PostId) -> Result<Option<Post>, DbError> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(self.pool)
        .await?;

        row.map(Post::try_from).transpose()
    }

    /// Insert a new post with empty likes and comments.
    ///
    /// The caller supplies the id; the database supplies the timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the insert fails.
    pub async fn insert(&self, id: PostId, post: &NewPost) -> Result<Post, DbError> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "INSERT INTO posts (id, user_id, user_name, user_title, user_avatar, content)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {POST_COLUMNS}"
        ))
        .bind(id.into_inner())
        .bind(&post.user_id)
        .bind(&post.user_name)
        .bind(&post.user_title)
        .bind(&post.user_avatar)
        .bind(&post.content)
        .fetch_one(self.pool)
        .await?;

        tracing::debug!(post_id = %id, "Inserted post");
        Post::try_from(row)
    }

    /// Overwrite the liker set of a post.
    ///
    /// Returns `None` if the post no longer exists.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the update fails.
    pub async fn replace_likes(
        &self,
        id: PostId,
        likes: &BTreeSet<UserId>,
    ) -> Result<Option<Post>, DbError> {
        let likes = serde_json::to_value(likes)?;
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "UPDATE posts SET likes = $2 WHERE id = $1 RETURNING {POST_COLUMNS}"
        ))
        .bind(id.into_inner())
        .bind(&likes)
        .fetch_optional(self.pool)
        .await?;

        row.map(Post::try_from).transpose()
    }

    /// Overwrite the comment sequence of a post.
    ///
    /// Returns `None` if the post no longer exists.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the update fails.
    pub async fn replace_comments(
        &self,
        id: PostId,
        comments: &[Comment],
    ) -> Result<Option<Post>, DbError> {
        let comments = serde_json::to_value(comments)?;
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "UPDATE posts SET comments = $2 WHERE id = $1 RETURNING {POST_COLUMNS}"
        ))
        .bind(id.into_inner())
        .bind(&comments)
        .fetch_optional(self.pool)
        .await?;

        row.map(Post::try_from).transpose()
    }
}

/// A row from the `posts` table.
///
/// Likes and comments stay as raw JSON until converted into a [`Post`].
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PostRow {
    /// Post id.
    pub id: Uuid,
    /// Author identifier.
    pub user_id: String,
    /// Author display name.
    pub user_name: String,
    /// Author title.
    pub user_title: String,
    /// Author avatar reference.
    pub user_avatar: String,
    /// Post body.
    pub content: String,
    /// JSONB array of liker ids.
    pub likes: serde_json::Value,
    /// JSONB array of comment documents.
    pub comments: serde_json::Value,
    /// Database-assigned creation time.
    pub created_at: DateTime<Utc>,
}

impl TryFrom<PostRow> for Post {
    type Error = DbError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: PostId::from(row.id),
            user_id: UserId(row.user_id),
            user_name: row.user_name,
            user_title: row.user_title,
            user_avatar: row.user_avatar,
            content: row.content,
            likes: serde_json::from_value(row.likes)?,
            comments: serde_json::from_value(row.comments)?,
            timestamp: row.created_at,
        })
    }
}
