//! Configuration for the feed client.

use crate::error::ClientError;

/// Default API root, matching the server's default bind and `/api` prefix.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the feed API, including the `/api` prefix.
    pub api_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl ClientConfig {
    /// Configuration pointing at `api_url` (a trailing `/` is dropped).
    pub fn new(api_url: &str) -> Self {
        Self {
            api_url: api_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Load configuration from the environment.
    ///
    /// Optional variables:
    /// - `LINKUP_API_URL` -- API base URL (default `http://localhost:8080/api`)
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ClientError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("LINKUP_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_owned());
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(ClientError::Config(format!(
                "invalid LINKUP_API_URL: {api_url}"
            )));
        }
        Ok(Self::new(&api_url))
    }
}
