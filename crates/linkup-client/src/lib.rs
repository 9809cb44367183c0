//! Feed client for LinkUp.
//!
//! Holds the session identity and a local cache of posts, talks to the
//! feed API over HTTP, and derives the view models a UI renders. The store
//! is the source of truth: the cache is replaced wholesale on refresh and
//! per post from like and comment responses.
//!
//! # Modules
//!
//! - [`api`] -- Typed HTTP calls to `/api/posts`
//! - [`app`] -- [`FeedClient`], one method per user action
//! - [`cache`] -- Posts keyed by id, with feed and profile orderings
//! - [`config`] -- API base URL
//! - [`error`] -- [`ClientError`]
//! - [`render`] -- View models and relative-time labels
//! - [`session`] -- Client-synthesized identity and session state

pub mod api;
pub mod app;
pub mod cache;
pub mod config;
pub mod error;
pub mod render;
pub mod session;

pub use api::FeedApi;
pub use app::FeedClient;
pub use cache::PostCache;
pub use config::ClientConfig;
pub use error::ClientError;
pub use render::{CommentLine, CommentsView, FeedView, PostCard, ProfileView, time_ago};
pub use session::{Identity, Session};
