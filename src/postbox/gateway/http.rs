use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::PostBackend;
use crate::error::{PostboxError, Result};
use crate::model::{Post, PostDraft};

/// HTTP client for a JSONPlaceholder-style posts collection.
pub struct HttpGateway {
    client: Client,
    base_url: String,
}

impl HttpGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn posts_url(&self) -> String {
        format!("{}/posts", self.base_url)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            warn!(%status, "request rejected by server");
            return Err(PostboxError::Transport(status));
        }
        response.json::<T>().await.map_err(PostboxError::Decode)
    }
}

#[async_trait]
impl PostBackend for HttpGateway {
    async fn list_posts(&self) -> Result<Vec<Post>> {
        debug!("GET {}", self.posts_url());
        let response = self
            .client
            .get(self.posts_url())
            .send()
            .await
            .map_err(PostboxError::Network)?;
        Self::decode(response).await
    }

    async fn create_post(&self, draft: &PostDraft) -> Result<Post> {
        debug!(title = %draft.title, "POST {}", self.posts_url());
        let response = self
            .client
            .post(self.posts_url())
            .json(draft)
            .send()
            .await
            .map_err(PostboxError::Network)?;
        Self::decode(response).await
    }

    async fn update_post(&self, id: u64, draft: &PostDraft) -> Result<Post> {
        let url = format!("{}/{}", self.posts_url(), id);
        debug!(id, "PUT {}", url);
        let response = self
            .client
            .put(url)
            .json(draft)
            .send()
            .await
            .map_err(PostboxError::Network)?;
        Self::decode(response).await
    }

    async fn search_posts(&self, query: &str) -> Result<Vec<Post>> {
        debug!(query, "GET {} (filtered)", self.posts_url());
        let response = self
            .client
            .get(self.posts_url())
            .query(&[("title_like", query), ("body_like", query)])
            .send()
            .await
            .map_err(PostboxError::Network)?;
        Self::decode(response).await
    }
}
