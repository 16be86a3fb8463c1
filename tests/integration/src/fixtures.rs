//! Test fixtures and data generators
//!
//! Comments are owned by the host content system in production; tests seed
//! them directly through the repository.

use anyhow::Result;
use rand::Rng;
use serde::Deserialize;

use flag_common::AppConfig;
use flag_core::entities::Comment;
use flag_core::value_objects::CommentId;
use flag_db::{create_pool, DatabaseConfig, PgCommentRepository};

/// Insert a fresh comment row with a random identifier and return its id
pub async fn seed_comment(config: &AppConfig) -> Result<i64> {
    let repo = comment_repository(config).await?;

    // High random ids keep test rows clear of anything the host seeds
    let id: i64 = rand::thread_rng().gen_range(1_000_000_000..i64::MAX);
    let comment = Comment::new(CommentId::new(id));

    repo.create(&comment)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to seed comment: {}", e))?;

    Ok(id)
}

/// Build a repository handle against the test database
pub async fn comment_repository(config: &AppConfig) -> Result<PgCommentRepository> {
    let db_config = DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: 2,
        min_connections: 1,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to connect to test database: {}", e))?;

    Ok(PgCommentRepository::new(pool))
}

/// Flag submission response body
#[derive(Debug, Deserialize)]
pub struct FlagResponseBody {
    pub status: String,
    pub message: String,
    pub escalated: bool,
}

/// Report count response body
#[derive(Debug, Deserialize)]
pub struct ReportCountBody {
    pub comment_id: String,
    pub report_count: i64,
    pub moderation_state: String,
}

/// Error response body
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
