//! Core entity structs for the LinkUp feed.
//!
//! A [`Post`] is the unit of persistence. Likes and comments live inside it
//! as embedded documents; neither has an identity or lifecycle of its own.
//! The JSON layout is camelCase to match what the browser client expects.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::{PostId, UserId};
use crate::requests::{NewComment, NewPost};

// ---------------------------------------------------------------------------
// Comment
// ---------------------------------------------------------------------------

/// A text reply embedded in a post's comment sequence.
///
/// The author fields are denormalized copies supplied by the client when
/// the comment was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Author identifier.
    pub user_id: UserId,
    /// Author display name.
    pub user_name: String,
    /// Author title (may be empty).
    #[serde(default)]
    pub user_title: String,
    /// Author avatar reference (may be empty).
    #[serde(default)]
    pub user_avatar: String,
    /// Comment body.
    pub text: String,
    /// When the comment was appended.
    pub timestamp: DateTime<Utc>,
}

impl Comment {
    /// Build a comment from a validated request, stamped with `timestamp`.
    pub fn from_request(request: NewComment, timestamp: DateTime<Utc>) -> Self {
        Self {
            user_id: UserId(request.user_id),
            user_name: request.user_name,
            user_title: request.user_title,
            user_avatar: request.user_avatar,
            text: request.text,
            timestamp,
        }
    }
}

// ---------------------------------------------------------------------------
// Post
// ---------------------------------------------------------------------------

/// A top-level feed item and the container for its likes and comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Store-assigned identifier.
    pub id: PostId,
    /// Author identifier.
    pub user_id: UserId,
    /// Author display name.
    pub user_name: String,
    /// Author title (may be empty).
    #[serde(default)]
    pub user_title: String,
    /// Author avatar reference (may be empty).
    #[serde(default)]
    pub user_avatar: String,
    /// Post body.
    pub content: String,
    /// Users who currently like this post. Each appears at most once.
    #[serde(default)]
    pub likes: BTreeSet<UserId>,
    /// Comments in append order.
    #[serde(default)]
    pub comments: Vec<Comment>,
    /// Store-assigned creation time.
    pub timestamp: DateTime<Utc>,
}

impl Post {
    /// Build a fresh post with no likes and no comments.
    pub fn from_request(id: PostId, request: NewPost, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id: UserId(request.user_id),
            user_name: request.user_name,
            user_title: request.user_title,
            user_avatar: request.user_avatar,
            content: request.content,
            likes: BTreeSet::new(),
            comments: Vec::new(),
            timestamp,
        }
    }

    /// Flip `user`'s membership in the liker set.
    ///
    /// Returns `true` if the post is now liked by `user`, `false` if the
    /// like was removed. Applying the same toggle twice is a no-op overall.
    pub fn toggle_like(&mut self, user: &UserId) -> bool {
        if self.likes.remove(user) {
            false
        } else {
            self.likes.insert(user.clone());
            true
        }
    }

    /// Whether `user` is in the liker set.
    pub fn is_liked_by(&self, user: &UserId) -> bool {
        self.likes.contains(user)
    }

    /// Append a comment at the end of the sequence.
    pub fn push_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }

    /// Number of likes.
    pub fn like_count(&self) -> usize {
        self.likes.len()
    }

    /// Number of comments.
    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }
}
