//! View models derived from the session and the post cache.
//!
//! Nothing here touches the network. Each builder is a pure function of
//! the cache, the viewer and the current time, so views can be rebuilt
//! after every action.

use chrono::{DateTime, Utc};
use linkup_types::{Comment, Post, PostId, UserId};

use crate::cache::PostCache;
use crate::session::Identity;

/// Placeholder when the feed or a profile has no posts.
pub const NO_POSTS: &str = "No posts yet.";
/// Placeholder when a post has no comments.
pub const NO_COMMENTS: &str = "No comments yet.";
/// Shown in place of the feed when the initial load fails.
pub const LOAD_FAILED: &str = "Could not load posts. Is the backend server running?";

/// Relative-time units, largest first, in seconds.
const INTERVALS: [(i64, &str); 5] = [
    (31_536_000, "y"),
    (2_592_000, "mo"),
    (86_400, "d"),
    (3_600, "h"),
    (60, "m"),
];

/// Compact relative age such as `3h ago` or `12s ago`.
///
/// Uses the largest unit with a whole count of at least one. Times in the
/// future render as `0s ago`.
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = now.signed_duration_since(then).num_seconds().max(0);
    INTERVALS
        .iter()
        .find_map(|(unit, label)| {
            seconds
                .checked_div(*unit)
                .filter(|count| *count >= 1)
                .map(|count| format!("{count}{label} ago"))
        })
        .unwrap_or_else(|| format!("{seconds}s ago"))
}

/// One post as the feed shows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCard {
    /// Post id, used to address like and comment actions.
    pub id: PostId,
    /// Author display name.
    pub author_name: String,
    /// Author title.
    pub author_title: String,
    /// Author avatar.
    pub author_avatar: String,
    /// Post body.
    pub content: String,
    /// Relative creation time.
    pub posted_ago: String,
    /// Number of likes.
    pub like_count: usize,
    /// Number of comments.
    pub comment_count: usize,
    /// Whether the viewer is in the liker set.
    pub liked_by_viewer: bool,
}

impl PostCard {
    /// Build the card for `post` as seen by `viewer`.
    pub fn new(post: &Post, viewer: &UserId, now: DateTime<Utc>) -> Self {
        Self {
            id: post.id,
            author_name: post.user_name.clone(),
            author_title: post.user_title.clone(),
            author_avatar: post.user_avatar.clone(),
            content: post.content.clone(),
            posted_ago: time_ago(post.timestamp, now),
            like_count: post.like_count(),
            comment_count: post.comment_count(),
            liked_by_viewer: post.is_liked_by(viewer),
        }
    }
}

/// One comment line in the comments panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentLine {
    /// Author display name.
    pub author_name: String,
    /// Author avatar.
    pub author_avatar: String,
    /// Comment body.
    pub text: String,
    /// Relative time the comment was written.
    pub posted_ago: String,
}

impl CommentLine {
    fn new(comment: &Comment, now: DateTime<Utc>) -> Self {
        Self {
            author_name: comment.user_name.clone(),
            author_avatar: comment.user_avatar.clone(),
            text: comment.text.clone(),
            posted_ago: time_ago(comment.timestamp, now),
        }
    }
}

/// The main feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedView {
    /// Nobody is signed in.
    Hidden,
    /// The last load failed; show the message instead of posts.
    Unavailable(String),
    /// Cards newest first; empty means show [`NO_POSTS`].
    Posts(Vec<PostCard>),
}

impl FeedView {
    /// Render the feed for `viewer`.
    pub fn build(cache: &PostCache, viewer: &Identity, now: DateTime<Utc>) -> Self {
        Self::Posts(
            cache
                .feed()
                .into_iter()
                .map(|post| PostCard::new(post, &viewer.id, now))
                .collect(),
        )
    }

    /// The text to show when there are no cards, if any.
    pub fn placeholder(&self) -> Option<&str> {
        match self {
            Self::Hidden => None,
            Self::Unavailable(message) => Some(message.as_str()),
            Self::Posts(cards) if cards.is_empty() => Some(NO_POSTS),
            Self::Posts(_) => None,
        }
    }
}

/// The viewer's own profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    /// Display name.
    pub name: String,
    /// Title.
    pub title: String,
    /// Avatar.
    pub avatar: String,
    /// About text or its placeholder.
    pub about: String,
    /// The viewer's own posts, newest first.
    pub posts: Vec<PostCard>,
}

impl ProfileView {
    /// Render the profile for `viewer`.
    pub fn build(cache: &PostCache, viewer: &Identity, now: DateTime<Utc>) -> Self {
        Self {
            name: viewer.name.clone(),
            title: viewer.title.clone(),
            avatar: viewer.avatar.clone(),
            about: viewer.about_or_placeholder().to_owned(),
            posts: cache
                .authored_by(&viewer.id)
                .into_iter()
                .map(|post| PostCard::new(post, &viewer.id, now))
                .collect(),
        }
    }

    /// [`NO_POSTS`] when the viewer has not posted.
    pub fn placeholder(&self) -> Option<&str> {
        self.posts.is_empty().then_some(NO_POSTS)
    }
}

/// The comments panel for one post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentsView {
    /// Post the panel belongs to.
    pub post_id: PostId,
    /// `Comments on <author>'s post`.
    pub heading: String,
    /// Comments oldest first.
    pub comments: Vec<CommentLine>,
}

impl CommentsView {
    /// Render the panel for `id`, or `None` if the post is not cached.
    pub fn build(cache: &PostCache, id: &PostId, now: DateTime<Utc>) -> Option<Self> {
        let post = cache.get(id)?;
        let comments = cache
            .comments_oldest_first(id)?
            .into_iter()
            .map(|comment| CommentLine::new(comment, now))
            .collect();

        Some(Self {
            post_id: *id,
            heading: format!("Comments on {}'s post", post.user_name),
            comments,
        })
    }

    /// [`NO_COMMENTS`] when the post has none.
    pub fn placeholder(&self) -> Option<&str> {
        self.comments.is_empty().then_some(NO_COMMENTS)
    }
}
