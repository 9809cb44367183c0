//! HTTP client for the feed store API.
//!
//! One method per store operation. Every call is a single request with the
//! transport's default timeout; any non-2xx response or transport failure
//! is logged and returned as a [`ClientError`].

use linkup_types::{LikeRequest, NewComment, NewPost, Post, PostId};
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::ClientError;

/// Typed access to `/api/posts` and its sub-resources.
#[derive(Debug, Clone)]
pub struct FeedApi {
    client: reqwest::Client,
    api_url: String,
}

impl FeedApi {
    /// Create a client for the configured API root.
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: config.api_url.clone(),
        }
    }

    /// `GET /posts`: every post, newest first.
    pub async fn list_posts(&self) -> Result<Vec<Post>, ClientError> {
        self.request::<_, ()>(Method::GET, "/posts", None).await
    }

    /// `POST /posts`: create a post.
    pub async fn create_post(&self, post: &NewPost) -> Result<Post, ClientError> {
        self.request(Method::POST, "/posts", Some(post)).await
    }

    /// `POST /posts/{id}/like`: toggle a like.
    pub async fn toggle_like(&self, id: PostId, like: &LikeRequest) -> Result<Post, ClientError> {
        self.request(Method::POST, &format!("/posts/{id}/like"), Some(like))
            .await
    }

    /// `POST /posts/{id}/comment`: append a comment.
    pub async fn add_comment(
        &self,
        id: PostId,
        comment: &NewComment,
    ) -> Result<Post, ClientError> {
        self.request(Method::POST, &format!("/posts/{id}/comment"), Some(comment))
            .await
    }

    /// Send one JSON request and decode the JSON response.
    async fn request<T, B>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let result = self.send(method.clone(), endpoint, body).await;
        if let Err(e) = &result {
            tracing::error!(%method, endpoint, error = %e, "API request failed");
        }
        result
    }

    async fn send<T, B>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{endpoint}", self.api_url);
        let mut request = self.client.request(method, &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read error body".to_owned());
            return Err(ClientError::Status {
                status: status.as_u16(),
                message: extract_message(&text),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}

/// Pull the `message` field out of an error body, falling back to the raw
/// text when the body is not the store's JSON error shape.
fn extract_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            json.get("message")
                .and_then(serde_json::Value::as_str)
                .map(ToOwned::to_owned)
        })
        .unwrap_or_else(|| body.to_owned())
}
