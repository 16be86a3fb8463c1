//! Flag service
//!
//! Handles flag submission end to end: duplicate detection, dual-track
//! history updates, the atomic report counter, and threshold escalation.

use tracing::{info, instrument, warn};

use flag_core::events::CommentEscalatedEvent;
use flag_core::value_objects::{client_token, CommentId, FlagHistory};

use crate::dto::RequesterContext;

use super::context::ServiceContext;
use super::detector::{DuplicateFlagDetector, FlagDecision};
use super::error::{ServiceError, ServiceResult};

/// Outcome of a flag submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagOutcome {
    /// The flag was counted
    Accepted {
        /// Report count after this flag
        report_count: i64,
        /// Whether this flag pushed the comment into moderation
        escalated: bool,
        /// Refreshed token for the client to persist, when it proved it can
        client_token: Option<String>,
    },
    /// Repeat submission, nothing was counted
    AlreadyFlagged,
}

/// Flag service
pub struct FlagService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FlagService<'a> {
    /// Create a new FlagService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record a flag against a comment
    ///
    /// Counter and state updates go to the durable store and their failures
    /// propagate. Token and fraud record updates are advisory; their
    /// failures degrade and never lose an otherwise valid flag.
    #[instrument(skip(self, requester), fields(fingerprint = %requester.fingerprint.hashed()))]
    pub async fn record_flag(
        &self,
        comment_id: CommentId,
        requester: &RequesterContext,
    ) -> ServiceResult<FlagOutcome> {
        if !self.ctx.comment_repo().exists(comment_id).await? {
            return Err(ServiceError::not_found("Comment", comment_id.to_string()));
        }

        let token_history = requester
            .client_token
            .as_deref()
            .map(client_token::decode)
            .unwrap_or_default();

        let fingerprint = requester.fingerprint.hashed();

        // A failed fraud read degrades to "no prior record" rather than
        // rejecting the flag.
        let fraud_record = match self.ctx.fraud_store().get(&fingerprint).await {
            Ok(record) => record,
            Err(e) => {
                warn!(error = %e, "Fraud record read failed, treating as absent");
                None
            }
        };

        let detector = DuplicateFlagDetector::new(self.ctx.flagging().no_cookie_grace);
        let decision = detector.evaluate(
            comment_id,
            &token_history,
            requester.storage_confirmed,
            fraud_record.as_ref(),
        );

        if decision == FlagDecision::AlreadyFlagged {
            info!(comment_id = %comment_id, "Duplicate flag rejected");
            return Ok(FlagOutcome::AlreadyFlagged);
        }

        // Only clients that proved they can persist tokens get one back;
        // handing tokens to everyone else would be pure noise.
        let refreshed_token = if requester.storage_confirmed {
            let mut updated = token_history;
            updated.increment(comment_id);
            Some(client_token::encode(&updated))
        } else {
            None
        };

        // The fraud record tracks the fingerprint regardless of token
        // support, with a refreshed expiry on every accepted flag.
        let mut record = fraud_record.unwrap_or_else(FlagHistory::new);
        record.increment(comment_id);
        if let Err(e) = self
            .ctx
            .fraud_store()
            .put(&fingerprint, &record, self.ctx.flagging().fraud_record_ttl())
            .await
        {
            warn!(error = %e, "Fraud record write failed, flag still counted");
        }

        let report_count = self
            .ctx
            .comment_repo()
            .increment_report_count(comment_id)
            .await?;

        info!(
            comment_id = %comment_id,
            report_count = report_count,
            "Flag recorded"
        );

        let escalated = self.maybe_escalate(comment_id, report_count).await?;

        Ok(FlagOutcome::Accepted {
            report_count,
            escalated,
            client_token: refreshed_token,
        })
    }

    /// Escalate the comment if it crossed the threshold
    ///
    /// Returns true only when this call performed the Visible to
    /// UnderModeration transition, so racing flags produce exactly one
    /// escalation and one notification.
    async fn maybe_escalate(
        &self,
        comment_id: CommentId,
        report_count: i64,
    ) -> ServiceResult<bool> {
        let Some(threshold) = self.ctx.flagging().threshold else {
            return Ok(false);
        };

        if report_count < i64::from(threshold) {
            return Ok(false);
        }

        // Sticky guard: once a moderator ruled on the comment, reports keep
        // counting but do not re-escalate unless the host allows it.
        let moderated = self.ctx.comment_repo().is_moderated(comment_id).await?;
        if moderated && !self.ctx.flagging().allow_reflag_after_moderation {
            return Ok(false);
        }

        if !self.ctx.comment_repo().begin_moderation(comment_id).await? {
            return Ok(false);
        }

        info!(
            comment_id = %comment_id,
            report_count = report_count,
            threshold = threshold,
            "Comment escalated to moderation"
        );

        let event = CommentEscalatedEvent::new(comment_id, report_count, threshold);
        if let Err(e) = self.ctx.notifier().notify(&event).await {
            warn!(error = %e, "Escalation notification failed");
        }

        Ok(true)
    }

    /// Current report count for a comment
    #[instrument(skip(self))]
    pub async fn report_count(&self, comment_id: CommentId) -> ServiceResult<i64> {
        Ok(self.ctx.comment_repo().report_count(comment_id).await?)
    }
}
