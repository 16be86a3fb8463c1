//! Comment database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the comments table
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: i64,
    pub report_count: i64,
    pub moderation_state: String,
    pub moderated: bool,
    pub created_at: DateTime<Utc>,
}
