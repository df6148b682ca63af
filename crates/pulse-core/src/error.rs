//! Domain-level error types.

use thiserror::Error;

use crate::ports::PubSubError;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Couldn't find {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: i32 },

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Vote count of post {id} would overflow")]
    VoteOverflow { id: i32 },
}

impl From<RepoError> for DomainError {
    fn from(err: RepoError) -> Self {
        DomainError::Internal(err.to_string())
    }
}

impl From<PubSubError> for DomainError {
    fn from(err: PubSubError) -> Self {
        DomainError::Internal(err.to_string())
    }
}
