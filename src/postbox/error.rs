use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PostboxError {
    #[error("Post not found: {0}")]
    PostNotFound(u64),

    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("Server returned {0}")]
    Transport(StatusCode),

    #[error("Invalid response body: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PostboxError>;
