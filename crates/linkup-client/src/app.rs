//! The feed client: session, cache and API wired together.
//!
//! Every user action maps to one method. Mutations need a signed-in
//! identity and make exactly one request (plus a refresh for create). A
//! failed request leaves the cache as it was and returns the error; it is
//! never retried.

use chrono::{DateTime, Utc};
use linkup_types::{LikeRequest, Post, PostId};
use tracing::{debug, info, warn};

use crate::api::FeedApi;
use crate::cache::PostCache;
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::render::{CommentsView, FeedView, LOAD_FAILED, ProfileView};
use crate::session::{Identity, Session};

/// Client-side state for one user of the feed.
#[derive(Debug)]
pub struct FeedClient {
    api: FeedApi,
    session: Session,
    cache: PostCache,
    load_failed: bool,
    open_comments: Option<PostId>,
}

impl FeedClient {
    /// A signed-out client talking to the configured API.
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            api: FeedApi::new(config),
            session: Session::Unauthenticated,
            cache: PostCache::new(),
            load_failed: false,
            open_comments: None,
        }
    }

    /// Current session.
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Posts the client currently knows about.
    pub const fn cache(&self) -> &PostCache {
        &self.cache
    }

    /// The post whose comments panel is open, if any.
    pub const fn open_comments_for(&self) -> Option<PostId> {
        self.open_comments
    }

    // -----------------------------------------------------------------
    // Session
    // -----------------------------------------------------------------

    /// Sign in as the demo identity and load the feed.
    ///
    /// The session is authenticated even if the load fails; the feed then
    /// shows the load-failure placeholder.
    pub async fn login(&mut self) -> Result<(), ClientError> {
        self.start_session(Identity::demo()).await
    }

    /// Sign up under `name` and load the feed.
    pub async fn signup(&mut self, name: &str) -> Result<(), ClientError> {
        self.start_session(Identity::signup(name, Utc::now())).await
    }

    async fn start_session(&mut self, identity: Identity) -> Result<(), ClientError> {
        info!(user = %identity.id, "Signed in");
        self.session.sign_in(identity);
        self.refresh().await
    }

    /// Sign out and forget every cached post.
    pub fn logout(&mut self) {
        if let Some(identity) = self.session.identity() {
            info!(user = %identity.id, "Signed out");
        }
        self.session.sign_out();
        self.cache.clear();
        self.load_failed = false;
        self.open_comments = None;
    }

    fn identity(&self) -> Result<&Identity, ClientError> {
        self.session.identity().ok_or(ClientError::NotAuthenticated)
    }

    // -----------------------------------------------------------------
    // Actions
    // -----------------------------------------------------------------

    /// Fetch every post and replace the cache wholesale.
    ///
    /// On failure the cache is left as it was and the feed renders the
    /// load-failure placeholder until the next successful refresh.
    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        self.identity()?;
        match self.api.list_posts().await {
            Ok(posts) => {
                debug!(count = posts.len(), "Feed refreshed");
                self.cache.replace_all(posts);
                self.load_failed = false;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Feed refresh failed");
                self.load_failed = true;
                Err(e)
            }
        }
    }

    /// Publish a post, then refresh the whole feed.
    ///
    /// Content is trimmed; empty content is rejected before any request.
    /// Once the store accepts the post this returns it, even if the
    /// follow-up refresh fails and the feed shows the load placeholder.
    pub async fn create_post(&mut self, content: &str) -> Result<Post, ClientError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(ClientError::EmptyInput("post content"));
        }
        let request = self.identity()?.new_post(content);

        let created = self.api.create_post(&request).await?;
        info!(post_id = %created.id, "Post created");

        // The post is stored; a failed reload only puts the feed on its
        // placeholder.
        if self.refresh().await.is_err() {
            debug!(post_id = %created.id, "Feed not reloaded after create");
        }
        Ok(created)
    }

    /// Toggle the viewer's like on `id` and cache the returned post.
    pub async fn toggle_like(&mut self, id: PostId) -> Result<Post, ClientError> {
        let request = LikeRequest {
            user_id: self.identity()?.id.to_string(),
        };

        let updated = self.api.toggle_like(id, &request).await?;
        self.cache.upsert(updated.clone());
        Ok(updated)
    }

    /// Open the comments panel for a cached post.
    pub fn open_comments(&mut self, id: PostId) -> Result<(), ClientError> {
        self.identity()?;
        if self.cache.get(&id).is_none() {
            return Err(ClientError::UnknownPost(id.to_string()));
        }
        self.open_comments = Some(id);
        Ok(())
    }

    /// Close the comments panel.
    pub const fn close_comments(&mut self) {
        self.open_comments = None;
    }

    /// Comment on `id` and cache the returned post.
    ///
    /// Text is trimmed; empty text is rejected before any request.
    pub async fn add_comment(&mut self, id: PostId, text: &str) -> Result<Post, ClientError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ClientError::EmptyInput("comment text"));
        }
        let request = self.identity()?.new_comment(text);

        let updated = self.api.add_comment(id, &request).await?;
        self.cache.upsert(updated.clone());
        Ok(updated)
    }

    // -----------------------------------------------------------------
    // Views
    // -----------------------------------------------------------------

    /// The main feed as of `now`.
    pub fn feed_view(&self, now: DateTime<Utc>) -> FeedView {
        match self.session.identity() {
            None => FeedView::Hidden,
            Some(_) if self.load_failed => FeedView::Unavailable(LOAD_FAILED.to_owned()),
            Some(identity) => FeedView::build(&self.cache, identity, now),
        }
    }

    /// The viewer's profile, or `None` when signed out.
    pub fn profile_view(&self, now: DateTime<Utc>) -> Option<ProfileView> {
        self.session
            .identity()
            .map(|identity| ProfileView::build(&self.cache, identity, now))
    }

    /// The open comments panel, if any.
    pub fn comments_view(&self, now: DateTime<Utc>) -> Option<CommentsView> {
        let id = self.open_comments?;
        CommentsView::build(&self.cache, &id, now)
    }
}
