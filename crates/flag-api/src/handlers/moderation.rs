//! Moderator-facing handlers
//!
//! These endpoints are for the host's moderation tooling; the service itself
//! does not authenticate them (deployments front them with the host's own
//! admin auth).

use axum::extract::{Path, State};

use flag_core::value_objects::CommentId;
use flag_service::ModerationService;

use crate::response::{ApiError, ApiResult, NoContent};
use crate::state::AppState;

/// Record a moderator ruling on a comment
///
/// POST /api/v1/comments/:comment_id/moderated
pub async fn mark_moderated(
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
) -> ApiResult<NoContent> {
    let id = parse_comment_id(&state, &comment_id)?;

    ModerationService::new(state.service_context())
        .mark_moderated(id)
        .await?;

    Ok(NoContent)
}

/// Reset a comment's report counter
///
/// DELETE /api/v1/comments/:comment_id/reports
pub async fn reset_reports(
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
) -> ApiResult<NoContent> {
    let id = parse_comment_id(&state, &comment_id)?;

    ModerationService::new(state.service_context())
        .reset_reports(id)
        .await?;

    Ok(NoContent)
}

fn parse_comment_id(state: &AppState, raw: &str) -> ApiResult<CommentId> {
    CommentId::parse(raw).map_err(|_| {
        ApiError::invalid_path(state.config().flagging.messages.invalid_request.clone())
    })
}
