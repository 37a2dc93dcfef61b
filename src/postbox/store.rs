//! # Post Store
//!
//! The in-memory post collection and the reconciliation logic that keeps it
//! consistent across create, edit, search and refresh. This module performs
//! no I/O: the gateway fetches, the store reconciles.
//!
//! Two sequences are kept apart:
//!
//! - **remote posts**: whatever the last successful fetch or search against
//!   the remote collection returned, replaced wholesale each time.
//! - **local posts**: posts authored in this session, newest first. The
//!   remote mock never returns them, so they live only here.
//!
//! The visible list is always local posts followed by remote posts. Ids for
//! local posts are assigned monotonically above everything currently known,
//! because the remote echoes the same id (101) for every create and cannot
//! be trusted for uniqueness. The two sequences are never dedup'd against
//! each other; the remote never hands a locally assigned id back.

use crate::error::{PostboxError, Result};
use crate::model::{Post, PostDraft};

#[derive(Debug, Default)]
pub struct PostStore {
    remote_posts: Vec<Post>,
    local_posts: Vec<Post>,
}

impl PostStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the remote sequence and discards session-local posts.
    ///
    /// Calling this again (a refresh) loses local posts; the server never
    /// had them, so there is nothing to merge them against.
    pub fn initialize(&mut self, remote: Vec<Post>) {
        self.remote_posts = remote;
        self.local_posts.clear();
    }

    /// Local posts first, then remote posts.
    pub fn visible_posts(&self) -> Vec<Post> {
        let mut posts = self.local_posts.clone();
        posts.extend(self.remote_posts.iter().cloned());
        posts
    }

    pub fn local_count(&self) -> usize {
        self.local_posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.local_posts.is_empty() && self.remote_posts.is_empty()
    }

    /// Looks up a post by id, locals taking precedence.
    pub fn post(&self, id: u64) -> Option<&Post> {
        self.local_posts
            .iter()
            .chain(self.remote_posts.iter())
            .find(|p| p.id == id)
    }

    /// Creates a session-local post from the draft.
    ///
    /// The id is one above the maximum id across both sequences (starting at
    /// 1 on an empty store), so local ids are strictly increasing and never
    /// collide with anything currently visible. The new post goes to the
    /// front of the local sequence.
    pub fn create(&mut self, draft: PostDraft) -> Post {
        let post = Post::new(self.next_id(), draft.title, draft.body);
        self.local_posts.insert(0, post.clone());
        post
    }

    /// Applies an edit in place, locals searched before remotes.
    ///
    /// A remote-only target updates the cached copy; the remote write (a
    /// gateway concern) does not persist server-side, so this cache is the
    /// only place the edit survives. Id and position are untouched.
    pub fn apply_edit(&mut self, id: u64, draft: PostDraft) -> Result<Post> {
        let post = self
            .local_posts
            .iter_mut()
            .chain(self.remote_posts.iter_mut())
            .find(|p| p.id == id)
            .ok_or(PostboxError::PostNotFound(id))?;

        post.title = draft.title;
        post.body = draft.body;
        Ok(post.clone())
    }

    /// Merges a search: local matches first, then the remote matches the
    /// caller fetched for the same query.
    ///
    /// A non-empty query replaces the remote sequence with `remote_matches`.
    /// An empty query never filters and leaves both sequences untouched;
    /// re-fetching the full collection is the caller's call.
    pub fn apply_search(&mut self, query: &str, remote_matches: Vec<Post>) -> Vec<Post> {
        if query.is_empty() {
            return self.visible_posts();
        }

        self.remote_posts = remote_matches;

        let mut results = self.filter_local(query);
        results.extend(self.remote_posts.iter().cloned());
        results
    }

    /// Case-insensitive substring match on title and body over local posts.
    pub fn filter_local(&self, query: &str) -> Vec<Post> {
        let query = query.to_lowercase();
        self.local_posts
            .iter()
            .filter(|p| {
                p.title.to_lowercase().contains(&query) || p.body.to_lowercase().contains(&query)
            })
            .cloned()
            .collect()
    }

    fn next_id(&self) -> u64 {
        self.local_posts
            .iter()
            .chain(self.remote_posts.iter())
            .map(|p| p.id)
            .max()
            .unwrap_or(0)
            + 1
    }
}
