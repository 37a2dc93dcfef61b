//! # Session Facade
//!
//! The single entry point a UI drives. The session owns the store, the
//! backend, the pending-edit state and the search debouncer, and exposes
//! the user intents: refresh, create, edit, view, search.
//!
//! Like the rest of the library this layer never prints: operations return
//! structured outcomes with [`CmdMessage`]s, and the debounced search
//! delivers its result as a [`SessionEvent`] on the channel handed out at
//! construction. Store mutations go through one async mutex, so two
//! in-flight completions cannot interleave their writes.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, Mutex};
use tracing::warn;

use crate::debounce::Debouncer;
use crate::error::{PostboxError, Result};
use crate::gateway::PostBackend;
use crate::model::{Post, PostDraft};
use crate::store::PostStore;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// The pending-edit interaction state.
///
/// Starting a new edit while one is pending simply retargets it; a
/// successful submit (edit or fresh create) returns to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditState {
    Idle,
    Editing(u64),
}

/// Completion of a debounced search, delivered on the session's event
/// channel rather than returned, since the caller has long moved on.
#[derive(Debug)]
pub enum SessionEvent {
    SearchCompleted { query: String, posts: Vec<Post> },
    SearchFailed { query: String, error: PostboxError },
}

/// A mutating operation's result: the post it touched plus messages for
/// the UI to print.
#[derive(Debug)]
pub struct Outcome {
    pub post: Post,
    pub messages: Vec<CmdMessage>,
}

/// A listing operation's result.
#[derive(Debug)]
pub struct ListOutcome {
    pub posts: Vec<Post>,
    pub messages: Vec<CmdMessage>,
}

pub struct Session<B: PostBackend> {
    backend: Arc<B>,
    store: Arc<Mutex<PostStore>>,
    edit: EditState,
    debouncer: Debouncer,
    events: mpsc::UnboundedSender<SessionEvent>,
}

impl<B: PostBackend + 'static> Session<B> {
    /// Creates a session and the receiving end of its event channel.
    pub fn new(backend: B, debounce: Duration) -> (Self, mpsc::UnboundedReceiver<SessionEvent>) {
        let (events, receiver) = mpsc::unbounded_channel();
        let session = Self {
            backend: Arc::new(backend),
            store: Arc::new(Mutex::new(PostStore::new())),
            edit: EditState::Idle,
            debouncer: Debouncer::new(debounce),
            events,
        };
        (session, receiver)
    }

    pub fn edit_state(&self) -> EditState {
        self.edit
    }

    /// Fetches the collection and resets the store with it.
    ///
    /// Session-local posts do not survive a refresh; when any are about to
    /// be discarded the outcome says so.
    pub async fn refresh(&mut self) -> Result<ListOutcome> {
        let remote = self.backend.list_posts().await?;

        let mut store = self.store.lock().await;
        let discarded = store.local_count();
        store.initialize(remote);

        let mut outcome = ListOutcome {
            posts: store.visible_posts(),
            messages: Vec::new(),
        };
        if discarded > 0 {
            outcome.messages.push(CmdMessage::warning(format!(
                "Discarded {} local post(s) not stored on the server",
                discarded
            )));
        }
        Ok(outcome)
    }

    pub async fn visible_posts(&self) -> Vec<Post> {
        self.store.lock().await.visible_posts()
    }

    /// View a single post from either sequence.
    pub async fn post(&self, id: u64) -> Result<Post> {
        self.store
            .lock()
            .await
            .post(id)
            .cloned()
            .ok_or(PostboxError::PostNotFound(id))
    }

    /// Submits the form: an edit when one is pending, a create otherwise.
    pub async fn submit(&mut self, draft: PostDraft) -> Result<Outcome> {
        match self.edit {
            EditState::Editing(id) => self.apply_edit(id, draft).await,
            EditState::Idle => self.create(draft).await,
        }
    }

    /// Creates a post: remote create first, then the local store.
    ///
    /// The server's echoed id is discarded; the store assigns the unique
    /// one. A remote failure propagates before anything local changes.
    pub async fn create(&mut self, draft: PostDraft) -> Result<Outcome> {
        let draft = draft.validate()?;
        let _echoed = self.backend.create_post(&draft).await?;

        let post = self.store.lock().await.create(draft);
        self.edit = EditState::Idle;

        let messages = vec![CmdMessage::success(format!("Post created: {}", post.title))];
        Ok(Outcome { post, messages })
    }

    /// Selects a post for editing. Last-selected wins.
    pub async fn begin_edit(&mut self, id: u64) -> Result<Post> {
        let post = self.post(id).await?;
        self.edit = EditState::Editing(id);
        Ok(post)
    }

    pub fn cancel_edit(&mut self) {
        self.edit = EditState::Idle;
    }

    /// Applies an edit optimistically, then tells the remote.
    ///
    /// The local mutation is kept even when the remote call fails: the mock
    /// never persists writes, so the cached copy is the only durable one.
    /// The failure is still surfaced as a warning.
    pub async fn apply_edit(&mut self, id: u64, draft: PostDraft) -> Result<Outcome> {
        let draft = draft.validate()?;
        let post = self.store.lock().await.apply_edit(id, draft.clone())?;
        self.edit = EditState::Idle;

        let mut messages = vec![CmdMessage::success(format!("Post updated: {}", post.title))];
        if let Err(e) = self.backend.update_post(id, &draft).await {
            warn!(id, error = %e, "remote update failed; keeping local edit");
            messages.push(CmdMessage::warning(format!(
                "Edit kept locally; remote update failed: {}",
                e
            )));
        }

        Ok(Outcome { post, messages })
    }

    /// Runs a search immediately.
    ///
    /// An empty query never filters: the current visible list comes back
    /// and the remote is not consulted. A non-empty query is matched by the
    /// backend and merged with local matches, locals first.
    pub async fn search(&mut self, query: &str) -> Result<Vec<Post>> {
        if query.is_empty() {
            return Ok(self.visible_posts().await);
        }
        let remote = self.backend.search_posts(query).await?;
        Ok(self.store.lock().await.apply_search(query, remote))
    }

    /// Schedules a search behind the quiescence window, replacing any search
    /// still waiting for its window. At most one search runs per window and
    /// it carries the latest query; the result arrives as a [`SessionEvent`].
    pub fn search_debounced(&mut self, query: String) {
        let backend = self.backend.clone();
        let store = self.store.clone();
        let events = self.events.clone();

        self.debouncer.schedule(async move {
            let event = if query.is_empty() {
                let posts = store.lock().await.visible_posts();
                SessionEvent::SearchCompleted { query, posts }
            } else {
                match backend.search_posts(&query).await {
                    Ok(remote) => {
                        let posts = store.lock().await.apply_search(&query, remote);
                        SessionEvent::SearchCompleted { query, posts }
                    }
                    Err(error) => SessionEvent::SearchFailed { query, error },
                }
            };
            // The receiver may be gone on shutdown.
            let _ = events.send(event);
        });
    }

    pub fn cancel_pending_search(&mut self) {
        self.debouncer.cancel();
    }
}
