use serde::{Deserialize, Serialize};

use crate::error::{PostboxError, Result};

/// A post as exchanged with the remote collection.
///
/// `user_id` only appears on remote-origin posts; locally authored posts
/// never carry it and it is skipped on serialization when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
}

impl Post {
    pub fn new(id: u64, title: String, body: String) -> Self {
        Self {
            id,
            title,
            body,
            user_id: None,
        }
    }
}

/// The payload for create and update calls: everything but the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub body: String,
}

impl PostDraft {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Trims both fields and rejects the draft if either ends up empty.
    pub fn validate(&self) -> Result<PostDraft> {
        let title = self.title.trim();
        let body = self.body.trim();

        if title.is_empty() {
            return Err(PostboxError::Validation("Title cannot be empty".into()));
        }
        if body.is_empty() {
            return Err(PostboxError::Validation("Body cannot be empty".into()));
        }

        Ok(PostDraft::new(title, body))
    }
}
