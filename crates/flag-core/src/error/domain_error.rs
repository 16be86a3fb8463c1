//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::CommentId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found / Validation
    // =========================================================================
    #[error("Comment not found: {0}")]
    CommentNotFound(CommentId),

    #[error("Invalid comment id: {0}")]
    InvalidCommentId(String),

    #[error("Invalid flagging threshold: {0} (must be between 1 and 100)")]
    InvalidThreshold(i64),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::InvalidCommentId(_) | Self::InvalidThreshold(_) => "INVALID_REQUEST",
            Self::DatabaseError(_) => "STORE_UNAVAILABLE",
            Self::CacheError(_) => "CACHE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::CommentNotFound(_))
    }

    /// Check if this is a validation error
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidCommentId(_) | Self::InvalidThreshold(_))
    }

    /// Check if this is a retryable infrastructure failure
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::DatabaseError(_) | Self::CacheError(_))
    }
}
