//! Shared type definitions for the LinkUp feed.
//!
//! This crate is the single source of truth for the wire format shared by
//! the store, the HTTP API and the client. Types flow downstream to
//! `TypeScript` via `ts-rs` for the browser client.
//!
//! # Modules
//!
//! - [`ids`] -- Typed identifiers for posts and users
//! - [`structs`] -- `Post` and its embedded `Comment`
//! - [`requests`] -- Create/like/comment payloads and their validation

pub mod ids;
pub mod requests;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use ids::{PostId, UserId};
pub use requests::{LikeRequest, NewComment, NewPost, describe_errors};
pub use structs::{Comment, Post};

#[cfg(test)]
mod tests {
    //! `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        // Files are written to `bindings/` relative to the crate root.
        use ts_rs::TS;

        let _ = crate::ids::PostId::export_all();
        let _ = crate::ids::UserId::export_all();
        let _ = crate::structs::Post::export_all();
        let _ = crate::structs::Comment::export_all();
        let _ = crate::requests::NewPost::export_all();
        let _ = crate::requests::NewComment::export_all();
        let _ = crate::requests::LikeRequest::export_all();
    }
}
