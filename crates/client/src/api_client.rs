//! HTTP client for the posts API.

use async_trait::async_trait;
use gratitude_shared::{ApiError, NewPost, Post, PostsQuery};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Path of the posts collection.
pub const POSTS_PATH: &str = "/api/posts";

/// The operations the feed and submitter need from the backend.
///
/// [`ApiClient`] is the real implementation; tests substitute scripted ones.
#[async_trait(?Send)]
pub trait PostsApi {
    /// `GET /api/posts?page={n}&limit={k}`
    async fn fetch_page(&self, query: PostsQuery) -> Result<Vec<Post>, ApiError>;

    /// `GET /api/posts` without pagination.
    async fn fetch_all(&self) -> Result<Vec<Post>, ApiError>;

    /// `POST /api/posts`. Backends answer with the created post or an empty body.
    async fn create_post(&self, post: &NewPost) -> Result<Option<Post>, ApiError>;
}

/// HTTP client for making JSON requests against the board backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: String::new(),
        }
    }

    /// Set the base URL for API requests
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        if self.base_url.is_empty() {
            if path.starts_with('/') {
                path.to_string()
            } else {
                format!("/{path}")
            }
        } else {
            let base = self.base_url.trim_end_matches('/');
            let path = path.trim_start_matches('/');
            format!("{base}/{path}")
        }
    }

    /// Make a GET request, optionally with a query string
    pub async fn get_json<TQuery: Serialize, TRes: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&TQuery>,
    ) -> Result<TRes, ApiError> {
        let mut rb = self.client.get(self.url(path));
        if let Some(query) = query {
            rb = rb.query(query);
        }
        let text = send(rb).await?;
        serde_json::from_str(&text).map_err(|e| ApiError::Deserialize(e.to_string()))
    }

    /// Make a POST request with JSON body. An empty response body decodes as `null`.
    pub async fn post_json<TReq: Serialize, TRes: DeserializeOwned>(
        &self,
        path: &str,
        body: &TReq,
    ) -> Result<TRes, ApiError> {
        let body_bytes = serde_json::to_vec(body).map_err(|e| ApiError::Encode(e.to_string()))?;

        let rb = self
            .client
            .post(self.url(path))
            .body(body_bytes)
            .header("Content-Type", "application/json");
        let text = send(rb).await?;

        if text.trim().is_empty() {
            serde_json::from_str("null").map_err(|e| ApiError::Deserialize(e.to_string()))
        } else {
            serde_json::from_str(&text).map_err(|e| ApiError::Deserialize(e.to_string()))
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

async fn send(rb: RequestBuilder) -> Result<String, ApiError> {
    let resp = rb.send().await.map_err(|e| ApiError::Network(e.to_string()))?;

    let status = resp.status().as_u16();
    let is_success = resp.status().is_success();

    let text = resp
        .text()
        .await
        .map_err(|e| ApiError::Network(format!("failed to read body: {e}")))?;

    if !is_success {
        return Err(ApiError::Http { status, body: text });
    }
    Ok(text)
}

#[async_trait(?Send)]
impl PostsApi for ApiClient {
    async fn fetch_page(&self, query: PostsQuery) -> Result<Vec<Post>, ApiError> {
        self.get_json(POSTS_PATH, Some(&query)).await
    }

    async fn fetch_all(&self) -> Result<Vec<Post>, ApiError> {
        self.get_json::<(), _>(POSTS_PATH, None).await
    }

    async fn create_post(&self, post: &NewPost) -> Result<Option<Post>, ApiError> {
        // Some backends acknowledge with `{"ok":true}` or similar; the post
        // still exists, so only the echo is dropped.
        let value: Option<serde_json::Value> = self.post_json(POSTS_PATH, post).await?;
        Ok(value.and_then(|v| match serde_json::from_value::<Post>(v) {
            Ok(created) => Some(created),
            Err(e) => {
                crate::log_debug!("POST {POSTS_PATH} acknowledged without a post body: {e}");
                None
            }
        }))
    }
}
