//! Duplicate flag detection
//!
//! Decides whether a flag submission is a repeat based on the two tracks of
//! evidence: the client-held token and the fingerprint-keyed fraud record.
//! The tracks get different strictness. A client that proved it can persist
//! tokens is judged primarily by its own token and gets a shared-network
//! grace against the fraud record; a client that proved nothing is judged
//! strictly by the fraud record alone.

use flag_core::value_objects::{CommentId, FlagHistory};

/// Outcome of duplicate detection for one submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagDecision {
    /// First flag from this requester, count it
    Accept,
    /// Repeat submission, do not count it again
    AlreadyFlagged,
}

/// Duplicate flag detector
#[derive(Debug, Clone)]
pub struct DuplicateFlagDetector {
    no_cookie_grace: u32,
}

impl DuplicateFlagDetector {
    /// Create a detector with the given shared-network grace count
    #[must_use]
    pub fn new(no_cookie_grace: u32) -> Self {
        Self { no_cookie_grace }
    }

    /// Evaluate a flag submission
    ///
    /// Rules, first match wins:
    /// 1. Storage-confirmed client whose own token lists the comment is a
    ///    repeat.
    /// 2. No fraud record for the fingerprint means no prior evidence,
    ///    accept.
    /// 3. Unconfirmed clients are bound by the fraud record: any prior flag
    ///    for this comment from the fingerprint is a repeat.
    /// 4. Confirmed clients with a clean token get grace: the fraud record
    ///    only blocks once the fingerprint has used up `no_cookie_grace`
    ///    flags for this comment. This keeps one flagger behind a shared
    ///    address from exhausting the office's voice.
    #[must_use]
    pub fn evaluate(
        &self,
        comment_id: CommentId,
        token_history: &FlagHistory,
        storage_confirmed: bool,
        fraud_record: Option<&FlagHistory>,
    ) -> FlagDecision {
        if storage_confirmed && token_history.contains(comment_id) {
            return FlagDecision::AlreadyFlagged;
        }

        let Some(record) = fraud_record else {
            return FlagDecision::Accept;
        };

        if !storage_confirmed {
            if record.contains(comment_id) {
                return FlagDecision::AlreadyFlagged;
            }
            return FlagDecision::Accept;
        }

        match record.count(comment_id) {
            Some(count) if count >= self.no_cookie_grace => FlagDecision::AlreadyFlagged,
            _ => FlagDecision::Accept,
        }
    }
}
