//! Comment entity - the flaggable content unit
//!
//! Comments are created by the host content system; this service only
//! mutates the report counter, the moderation state, and the sticky
//! moderated flag.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::CommentId;

/// Moderation state of a comment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModerationState {
    /// Publicly visible (initial state)
    #[default]
    Visible,
    /// Escalated and awaiting a moderator decision
    UnderModeration,
}

impl ModerationState {
    /// Database/string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Visible => "visible",
            Self::UnderModeration => "under_moderation",
        }
    }

    /// Parse from the database representation; unknown values degrade to Visible
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s {
            "under_moderation" => Self::UnderModeration,
            _ => Self::Visible,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_under_moderation(&self) -> bool {
        matches!(self, Self::UnderModeration)
    }
}

/// Comment entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    pub report_count: i64,
    pub state: ModerationState,
    /// Sticky: true once a moderator has ever acted on this comment,
    /// never automatically reverted.
    pub moderated: bool,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a fresh, unflagged comment
    #[must_use]
    pub fn new(id: CommentId) -> Self {
        Self {
            id,
            report_count: 0,
            state: ModerationState::Visible,
            moderated: false,
            created_at: Utc::now(),
        }
    }

    /// Whether the comment is currently awaiting moderation
    #[inline]
    #[must_use]
    pub fn is_under_moderation(&self) -> bool {
        self.state.is_under_moderation()
    }

    /// Whether automatic escalation is suppressed for this comment
    ///
    /// Once a moderator has made a call, further reports keep counting but
    /// do not re-escalate unless the host explicitly allows re-flagging.
    #[must_use]
    pub fn escalation_suppressed(&self, allow_reflag: bool) -> bool {
        self.moderated && !allow_reflag
    }
}
