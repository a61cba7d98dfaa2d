/// Error types for forum-service
use crate::domain::PostId;
use thiserror::Error;

/// Failure raised by an external collaborator (content store, translation provider).
/// The core passes these through untouched and never retries.
#[derive(Error, Debug)]
pub enum CollaboratorError {
    #[error("Store error: {0}")]
    Store(String),

    #[error("Translation provider error: {0}")]
    Provider(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ForumError {
    #[error("Content not found: {0}")]
    ContentNotFound(PostId),

    #[error("Referenced post not found: {0}")]
    ReferenceNotFound(PostId),

    #[error("Content must not be empty")]
    EmptyContent,

    #[error("Text to translate must not be empty")]
    EmptyText,

    #[error("User {username} is not the creator of post {post_id}")]
    NotCreator { post_id: PostId, username: String },

    #[error("Invalid target: {0}")]
    InvalidTarget(String),

    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),
}

impl ForumError {
    /// Whether the error comes from validation or lookup rather than a collaborator
    pub fn is_client_error(&self) -> bool {
        !matches!(self, ForumError::Collaborator(_))
    }
}

/// Result type alias for forum operations
pub type ForumResult<T> = Result<T, ForumError>;

/// Result type alias for collaborator calls
pub type CollaboratorResult<T> = Result<T, CollaboratorError>;
