//! Response DTOs for the flagging API

use chrono::{DateTime, Utc};
use flag_common::FlagMessages;
use serde::Serialize;

use crate::services::FlagOutcome;

/// API response for a flag submission
#[derive(Debug, Clone, Serialize)]
pub struct FlagResponse {
    /// "accepted" or "already_flagged"
    pub status: &'static str,
    /// User-visible message
    pub message: String,
    /// Whether this flag pushed the comment into moderation
    pub escalated: bool,
}

impl FlagResponse {
    /// Build the user-facing response for a flag outcome
    #[must_use]
    pub fn from_outcome(outcome: &FlagOutcome, messages: &FlagMessages) -> Self {
        match outcome {
            FlagOutcome::Accepted { escalated, .. } => Self {
                status: "accepted",
                message: messages.thank_you.clone(),
                escalated: *escalated,
            },
            FlagOutcome::AlreadyFlagged => Self {
                status: "already_flagged",
                message: messages.already_flagged.clone(),
                escalated: false,
            },
        }
    }
}

/// API response for a report count query
#[derive(Debug, Clone, Serialize)]
pub struct ReportCountResponse {
    pub comment_id: String,
    pub report_count: i64,
    pub moderation_state: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    #[must_use]
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
    pub redis: String,
}

impl ReadinessResponse {
    #[must_use]
    pub fn ready(database_healthy: bool, redis_healthy: bool) -> Self {
        let all_healthy = database_healthy && redis_healthy;
        Self {
            status: if all_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
                redis: if redis_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}
