//! Flag submission handlers

use axum::extract::{Path, State};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde_json::json;

use flag_core::value_objects::CommentId;
use flag_service::{FlagOutcome, FlagResponse, FlagService, ModerationService, ReportCountResponse};

use crate::extractors::{Requester, FLAG_TOKEN_COOKIE, STORAGE_CHECK_COOKIE};
use crate::response::{ApiError, ApiJson, ApiResult};
use crate::state::AppState;

/// Submit a flag against a comment
///
/// POST /api/v1/comments/:comment_id/flags
pub async fn submit_flag(
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
    jar: CookieJar,
    Requester(requester): Requester,
) -> ApiResult<(CookieJar, ApiJson<FlagResponse>)> {
    let id = parse_comment_id(&state, &comment_id)?;

    let service = FlagService::new(state.service_context());
    let outcome = service.record_flag(id, &requester).await?;

    let response = FlagResponse::from_outcome(&outcome, &state.config().flagging.messages);

    // Hand the refreshed token back only when one was issued
    let jar = match &outcome {
        FlagOutcome::Accepted {
            client_token: Some(token),
            ..
        } => jar.add(token_cookie(
            token.clone(),
            state.config().flagging.client_token_ttl_secs,
        )),
        _ => jar,
    };

    Ok((jar, ApiJson(response)))
}

/// Report count and moderation state for a comment
///
/// GET /api/v1/comments/:comment_id/reports
pub async fn get_report_count(
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
) -> ApiResult<ApiJson<ReportCountResponse>> {
    let id = parse_comment_id(&state, &comment_id)?;

    let ctx = state.service_context();
    let report_count = FlagService::new(ctx).report_count(id).await?;
    let moderation_state = ModerationService::new(ctx).moderation_state(id).await?;

    Ok(ApiJson(ReportCountResponse {
        comment_id: id.to_string(),
        report_count,
        moderation_state: moderation_state.as_str().to_string(),
    }))
}

/// Storage probe
///
/// GET /api/v1/client-check
///
/// Sets a probe cookie; a client that sends it back on later requests has
/// proven it persists cookies and gets the relaxed duplicate rules.
pub async fn client_check(jar: CookieJar) -> (CookieJar, ApiJson<serde_json::Value>) {
    let probe = Cookie::build((STORAGE_CHECK_COOKIE, "1"))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();

    (jar.add(probe), ApiJson(json!({ "storage_check": "set" })))
}

fn parse_comment_id(state: &AppState, raw: &str) -> ApiResult<CommentId> {
    CommentId::parse(raw).map_err(|_| {
        ApiError::invalid_path(state.config().flagging.messages.invalid_request.clone())
    })
}

fn token_cookie(token: String, ttl_secs: u64) -> Cookie<'static> {
    Cookie::build((FLAG_TOKEN_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::seconds(ttl_secs.min(i64::MAX as u64) as i64))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_cookie_attributes() {
        let cookie = token_cookie("abc".to_string(), 604_800);
        assert_eq!(cookie.name(), FLAG_TOKEN_COOKIE);
        assert_eq!(cookie.value(), "abc");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.max_age(), Some(time::Duration::seconds(604_800)));
    }
}
