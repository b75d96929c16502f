//! Domain-level error types.

use thiserror::Error;

use crate::ports::{PasswordError, UserSourceError};

/// Input rejected by the ingestion pipeline or a lookup.
///
/// The display string is the reason reported to the client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("content required")]
    ContentRequired,

    #[error("content too long")]
    ContentTooLong,

    #[error("user id required")]
    UserIdRequired,

    #[error("invalid {0} id")]
    InvalidId(&'static str),
}

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{entity_type} not found")]
    NotFound { entity_type: &'static str, id: i32 },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] RepoError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn not_found(entity_type: &'static str, id: i32) -> Self {
        Self::NotFound { entity_type, id }
    }
}

impl From<PasswordError> for DomainError {
    fn from(err: PasswordError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<UserSourceError> for DomainError {
    fn from(err: UserSourceError) -> Self {
        Self::Internal(err.to_string())
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_reasons() {
        assert_eq!(ValidationError::ContentRequired.to_string(), "content required");
        assert_eq!(ValidationError::ContentTooLong.to_string(), "content too long");
        assert_eq!(ValidationError::InvalidId("comment").to_string(), "invalid comment id");
    }
}
