//! Domain events - events emitted when flagging state changes
//!
//! These events are used for:
//! - Notifying the host system that a comment was escalated to moderation
//! - Audit logging

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::CommentId;

/// All possible domain events
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DomainEvent {
    CommentFlagged(CommentFlaggedEvent),
    CommentEscalated(CommentEscalatedEvent),
}

impl DomainEvent {
    /// Get the event type name
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::CommentFlagged(_) => "COMMENT_FLAGGED",
            Self::CommentEscalated(_) => "COMMENT_ESCALATED",
        }
    }

    /// Get the timestamp of the event
    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::CommentFlagged(e) => e.timestamp,
            Self::CommentEscalated(e) => e.timestamp,
        }
    }
}

/// An accepted flag incremented a comment's report counter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentFlaggedEvent {
    pub comment_id: CommentId,
    pub report_count: i64,
    pub timestamp: DateTime<Utc>,
}

impl CommentFlaggedEvent {
    #[must_use]
    pub fn new(comment_id: CommentId, report_count: i64) -> Self {
        Self {
            comment_id,
            report_count,
            timestamp: Utc::now(),
        }
    }
}

/// A comment crossed the report threshold and was sent to moderation
///
/// Emitted exactly once per Visible -> UnderModeration transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentEscalatedEvent {
    pub comment_id: CommentId,
    pub report_count: i64,
    pub threshold: u32,
    pub timestamp: DateTime<Utc>,
}

impl CommentEscalatedEvent {
    #[must_use]
    pub fn new(comment_id: CommentId, report_count: i64, threshold: u32) -> Self {
        Self {
            comment_id,
            report_count,
            threshold,
            timestamp: Utc::now(),
        }
    }
}
