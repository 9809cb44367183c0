//! Data layer for the LinkUp feed.
//!
//! Posts are stored as self-contained documents: the liker set and the
//! comment sequence travel with the post and are never stored apart from
//! it. [`FeedStore`] exposes the four feed operations on top of one of two
//! backends.
//!
//! # Architecture
//!
//! ```text
//! FeedStore (validate, assign ids/timestamps, toggle/append)
//!     |
//!     +-- Postgres --> PostStore (posts table, JSONB likes/comments)
//!     |
//!     +-- Memory ----> MemoryStore (RwLock<BTreeMap<PostId, Post>>)
//! ```
//!
//! # Modules
//!
//! - [`store`] -- Backend dispatch and the feed operations
//! - [`post_store`] -- `posts` table queries
//! - [`memory`] -- In-memory backend
//! - [`postgres`] -- `PostgreSQL` connection pool and configuration
//! - [`error`] -- Shared error types

pub mod error;
pub mod memory;
pub mod post_store;
pub mod postgres;
pub mod store;

// Re-export primary types for convenience.
pub use error::DbError;
pub use memory::MemoryStore;
pub use post_store::{PostRow, PostStore};
pub use postgres::{PostgresConfig, PostgresPool};
pub use store::FeedStore;
