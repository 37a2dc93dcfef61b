//! # Gateway Layer
//!
//! The four operations the client performs against the remote posts
//! collection, behind the [`PostBackend`] trait so the rest of the crate
//! never cares where posts come from.
//!
//! ## Implementations
//!
//! - [`http::HttpGateway`]: production client over HTTP
//! - [`memory::InMemoryBackend`]: in-memory stand-in for tests, faithful to
//!   the mock API's quirks (every create is echoed with id 101, updates are
//!   echoed but not durable)
//!
//! All four operations propagate failures to the caller; logging at this
//! boundary is a side effect, never a recovery.

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{Post, PostDraft};

pub mod http;
pub mod memory;

/// Abstract interface to the remote posts collection.
#[async_trait]
pub trait PostBackend: Send + Sync {
    /// Fetch the whole collection.
    async fn list_posts(&self) -> Result<Vec<Post>>;

    /// Create a post from the draft.
    ///
    /// Returns the server's echoed representation. The mock backend assigns
    /// id 101 to every create, so the echoed id must not be trusted for
    /// uniqueness; the store assigns its own.
    async fn create_post(&self, draft: &PostDraft) -> Result<Post>;

    /// Update the post at `id`.
    ///
    /// The echo is returned but the mock backend does not persist the write;
    /// the store's cached copy is the durable one for this session.
    async fn update_post(&self, id: u64, draft: &PostDraft) -> Result<Post>;

    /// Fetch posts whose title or body contains `query`.
    ///
    /// Callers never pass an empty query; an empty search means "show
    /// everything" and is resolved against the store instead.
    async fn search_posts(&self, query: &str) -> Result<Vec<Post>>;
}
