//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{flags, health, moderation};
use crate::state::AppState;

/// Create the main API router (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .route("/comments/:comment_id/flags", post(flags::submit_flag))
        .route(
            "/comments/:comment_id/reports",
            get(flags::get_report_count).delete(moderation::reset_reports),
        )
        .route(
            "/comments/:comment_id/moderated",
            post(moderation::mark_moderated),
        )
        .route("/client-check", get(flags::client_check))
}
