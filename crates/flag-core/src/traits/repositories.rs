//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. The durable comment store and the
//! ephemeral fraud store are deliberately separate ports with different
//! failure semantics: durable failures propagate, ephemeral failures
//! degrade to "no prior record".

use std::time::Duration;

use async_trait::async_trait;

use crate::entities::ModerationState;
use crate::error::DomainError;
use crate::events::CommentEscalatedEvent;
use crate::value_objects::{CommentId, FingerprintHash, FlagHistory};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Comment Repository (durable item store)
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Check whether a comment exists
    async fn exists(&self, id: CommentId) -> RepoResult<bool>;

    /// Current report count for a comment
    async fn report_count(&self, id: CommentId) -> RepoResult<i64>;

    /// Atomically increment the report count, returning the new count
    ///
    /// The read-increment-write must be a single atomic operation; two
    /// concurrent increments must both be reflected in the final count.
    async fn increment_report_count(&self, id: CommentId) -> RepoResult<i64>;

    /// Current moderation state
    async fn moderation_state(&self, id: CommentId) -> RepoResult<ModerationState>;

    /// Compare-and-set transition Visible -> UnderModeration
    ///
    /// Returns true only for the caller that actually performed the
    /// transition; a comment already under moderation returns false.
    async fn begin_moderation(&self, id: CommentId) -> RepoResult<bool>;

    /// Whether a moderator has ever acted on this comment (sticky flag)
    async fn is_moderated(&self, id: CommentId) -> RepoResult<bool>;

    /// Set the sticky moderated flag
    async fn set_moderated(&self, id: CommentId, moderated: bool) -> RepoResult<()>;

    /// Moderator-facing reset of the report counter
    async fn reset_report_count(&self, id: CommentId) -> RepoResult<()>;
}

// ============================================================================
// Fraud Record Store (ephemeral, fingerprint-keyed)
// ============================================================================

#[async_trait]
pub trait FraudRecordStore: Send + Sync {
    /// Fetch the flag history recorded for a fingerprint, if any
    async fn get(&self, fingerprint: &FingerprintHash) -> RepoResult<Option<FlagHistory>>;

    /// Upsert the flag history for a fingerprint with a refreshed TTL
    async fn put(
        &self,
        fingerprint: &FingerprintHash,
        history: &FlagHistory,
        ttl: Duration,
    ) -> RepoResult<()>;
}

// ============================================================================
// Escalation Notifier
// ============================================================================

/// Observer for moderation escalations
///
/// Invoked exactly once per Visible -> UnderModeration transition (the
/// caller gates on the compare-and-set result). Delivery is best-effort;
/// failures must not fail the flag request.
#[async_trait]
pub trait EscalationNotifier: Send + Sync {
    async fn notify(&self, event: &CommentEscalatedEvent) -> RepoResult<()>;
}
