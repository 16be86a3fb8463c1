//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Running Redis instance
//! - Environment variables: DATABASE_URL, REDIS_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, plain_client, test_config, TestServer,
};
use reqwest::StatusCode;

fn flag_path(comment_id: i64) -> String {
    format!("/api/v1/comments/{comment_id}/flags")
}

fn reports_path(comment_id: i64) -> String {
    format!("/api/v1/comments/{comment_id}/reports")
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Flag Submission Tests
// ============================================================================

#[tokio::test]
async fn test_first_flag_accepted() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let comment_id = seed_comment(&server.config).await.unwrap();

    let response = server.post(&flag_path(comment_id)).await.unwrap();
    let body: FlagResponseBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.status, "accepted");
    assert!(!body.escalated);
    assert!(!body.message.is_empty());

    let response = server.get(&reports_path(comment_id)).await.unwrap();
    let counts: ReportCountBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(counts.comment_id, comment_id.to_string());
    assert_eq!(counts.report_count, 1);
    assert_eq!(counts.moderation_state, "visible");
}

#[tokio::test]
async fn test_repeat_flag_with_cookies_is_duplicate() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let comment_id = seed_comment(&server.config).await.unwrap();

    // Prove cookie storage first so the flag token gets issued
    let response = server.get("/api/v1/client-check").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.post(&flag_path(comment_id)).await.unwrap();
    assert!(response
        .headers()
        .get_all(reqwest::header::SET_COOKIE)
        .iter()
        .any(|v| v.to_str().unwrap_or("").starts_with("flag_token=")));
    let body: FlagResponseBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.status, "accepted");

    // The cookie store sends the token back, so this is a duplicate
    let response = server.post(&flag_path(comment_id)).await.unwrap();
    let body: FlagResponseBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.status, "already_flagged");

    // Only the first flag counted
    let response = server.get(&reports_path(comment_id)).await.unwrap();
    let counts: ReportCountBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(counts.report_count, 1);
}

#[tokio::test]
async fn test_repeat_flag_without_cookies_is_duplicate() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let comment_id = seed_comment(&server.config).await.unwrap();

    // A client that never sends cookies back is caught by the
    // address-keyed record instead
    let client = plain_client().unwrap();

    let response = server
        .post_as(&client, &flag_path(comment_id))
        .await
        .unwrap();
    let body: FlagResponseBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.status, "accepted");

    let response = server
        .post_as(&client, &flag_path(comment_id))
        .await
        .unwrap();
    let body: FlagResponseBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.status, "already_flagged");
}

#[tokio::test]
async fn test_flag_unknown_comment_returns_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Ids this large are never seeded
    let response = server.post(&flag_path(i64::MAX)).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error.error.code, "UNKNOWN_COMMENT");
}

#[tokio::test]
async fn test_flag_invalid_comment_id_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/api/v1/comments/not-a-number/flags")
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
    assert_eq!(error.error.code, "INVALID_REQUEST");
    assert!(!error.error.message.is_empty());
}

#[tokio::test]
async fn test_escalation_at_threshold() {
    if !check_test_env().await {
        return;
    }

    let mut config = test_config().unwrap();
    config.flagging.threshold = Some(5);

    let server = TestServer::start_with_config(config)
        .await
        .expect("Failed to start server");
    let comment_id = seed_comment(&server.config).await.unwrap();

    // Distinct forwarded addresses so each flag counts as a new reporter
    let client = plain_client().unwrap();
    for i in 1..=5u32 {
        let url = format!("{}{}", server.base_url(), flag_path(comment_id));
        let response = client
            .post(&url)
            .header("x-forwarded-for", format!("203.0.113.{i}"))
            .send()
            .await
            .unwrap();
        let body: FlagResponseBody = assert_json(response, StatusCode::OK).await.unwrap();
        assert_eq!(body.status, "accepted");
        assert_eq!(body.escalated, i == 5);
    }

    let response = server.get(&reports_path(comment_id)).await.unwrap();
    let counts: ReportCountBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(counts.report_count, 5);
    assert_eq!(counts.moderation_state, "under_moderation");
}

// ============================================================================
// Storage Probe Tests
// ============================================================================

#[tokio::test]
async fn test_client_check_sets_probe_cookie() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/client-check").await.unwrap();
    let has_probe = response
        .headers()
        .get_all(reqwest::header::SET_COOKIE)
        .iter()
        .any(|v| v.to_str().unwrap_or("").starts_with("flag_storage_check="));
    assert!(has_probe);
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Moderation Tests
// ============================================================================

#[tokio::test]
async fn test_reset_reports() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let comment_id = seed_comment(&server.config).await.unwrap();

    let response = server.post(&flag_path(comment_id)).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.delete(&reports_path(comment_id)).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&reports_path(comment_id)).await.unwrap();
    let counts: ReportCountBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(counts.report_count, 0);
}

#[tokio::test]
async fn test_mark_moderated() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let comment_id = seed_comment(&server.config).await.unwrap();

    let response = server
        .post(&format!("/api/v1/comments/{comment_id}/moderated"))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

#[tokio::test]
async fn test_moderation_on_unknown_comment_returns_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.delete(&reports_path(i64::MAX)).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error.error.code, "UNKNOWN_COMMENT");
}
