use async_trait::async_trait;
use tokio::sync::Mutex;

use super::PostBackend;
use crate::error::Result;
use crate::model::{Post, PostDraft};

/// The id the mock API echoes for every create, regardless of contents.
pub const MOCK_CREATED_ID: u64 = 101;

/// In-memory backend for testing and offline development.
///
/// Reproduces the mock API's observable behavior: creates are echoed with
/// id 101 and never stored, updates are echoed without persisting, and
/// `_like` search is a case-insensitive contains on title or body.
#[derive(Default)]
pub struct InMemoryBackend {
    posts: Mutex<Vec<Post>>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: Mutex::new(posts),
        }
    }
}

#[async_trait]
impl PostBackend for InMemoryBackend {
    async fn list_posts(&self) -> Result<Vec<Post>> {
        Ok(self.posts.lock().await.clone())
    }

    async fn create_post(&self, draft: &PostDraft) -> Result<Post> {
        Ok(Post::new(
            MOCK_CREATED_ID,
            draft.title.clone(),
            draft.body.clone(),
        ))
    }

    async fn update_post(&self, id: u64, draft: &PostDraft) -> Result<Post> {
        Ok(Post::new(id, draft.title.clone(), draft.body.clone()))
    }

    async fn search_posts(&self, query: &str) -> Result<Vec<Post>> {
        let query = query.to_lowercase();
        Ok(self
            .posts
            .lock()
            .await
            .iter()
            .filter(|p| {
                p.title.to_lowercase().contains(&query) || p.body.to_lowercase().contains(&query)
            })
            .cloned()
            .collect())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// A small remote collection for session and store tests.
    pub fn backend_with_posts(count: u64) -> InMemoryBackend {
        let posts = (1..=count)
            .map(|i| Post::new(i, format!("Remote Post {}", i), format!("Body {}", i)))
            .collect();
        InMemoryBackend::with_posts(posts)
    }
}
