//! Moderation service
//!
//! Moderator-facing operations: recording a ruling on an escalated comment
//! and resetting its report counter so the flag history starts clean.

use tracing::{info, instrument};

use flag_core::entities::ModerationState;
use flag_core::value_objects::CommentId;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Moderation service
pub struct ModerationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ModerationService<'a> {
    /// Create a new ModerationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record that a moderator ruled on a comment
    ///
    /// Sets the sticky moderated flag, which suppresses future automatic
    /// escalation unless the host allows re-flagging.
    #[instrument(skip(self))]
    pub async fn mark_moderated(&self, comment_id: CommentId) -> ServiceResult<()> {
        if !self.ctx.comment_repo().exists(comment_id).await? {
            return Err(ServiceError::not_found("Comment", comment_id.to_string()));
        }

        self.ctx
            .comment_repo()
            .set_moderated(comment_id, true)
            .await?;

        info!(comment_id = %comment_id, "Comment marked as moderated");
        Ok(())
    }

    /// Reset a comment's report counter
    ///
    /// Used after a moderator clears a comment so stale reports do not push
    /// it straight back over the threshold.
    #[instrument(skip(self))]
    pub async fn reset_reports(&self, comment_id: CommentId) -> ServiceResult<()> {
        if !self.ctx.comment_repo().exists(comment_id).await? {
            return Err(ServiceError::not_found("Comment", comment_id.to_string()));
        }

        self.ctx.comment_repo().reset_report_count(comment_id).await?;

        info!(comment_id = %comment_id, "Report counter reset");
        Ok(())
    }

    /// Current moderation state of a comment
    #[instrument(skip(self))]
    pub async fn moderation_state(&self, comment_id: CommentId) -> ServiceResult<ModerationState> {
        Ok(self.ctx.comment_repo().moderation_state(comment_id).await?)
    }
}
