//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use flag_core::entities::{Comment, ModerationState};
use flag_core::traits::{CommentRepository, RepoResult};
use flag_core::value_objects::CommentId;

use crate::models::CommentModel;

use super::error::{comment_not_found, map_db_error};

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a comment row.
    ///
    /// Comments are owned by the host content system; this exists for the
    /// host's ingestion wiring and for test fixtures, not for the flagging
    /// core, which only ever mutates existing rows.
    #[instrument(skip(self))]
    pub async fn create(&self, comment: &Comment) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO comments (id, report_count, moderation_state, moderated, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(comment.id.into_inner())
        .bind(comment.report_count)
        .bind(comment.state.as_str())
        .bind(comment.moderated)
        .bind(comment.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    /// Fetch a full comment row
    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: CommentId) -> RepoResult<Option<Comment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r#"
            SELECT id, report_count, moderation_state, moderated, created_at
            FROM comments
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Comment::from))
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn exists(&self, id: CommentId) -> RepoResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM comments WHERE id = $1)
            "#,
        )
        .bind(id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(exists)
    }

    #[instrument(skip(self))]
    async fn report_count(&self, id: CommentId) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT report_count FROM comments WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        count.ok_or_else(|| comment_not_found(id))
    }

    #[instrument(skip(self))]
    async fn increment_report_count(&self, id: CommentId) -> RepoResult<i64> {
        // Single-statement read-increment-write; concurrent callers each
        // get a distinct new count.
        let new_count = sqlx::query_scalar::<_, i64>(
            r#"
            UPDATE comments
            SET report_count = report_count + 1
            WHERE id = $1
            RETURNING report_count
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        new_count.ok_or_else(|| comment_not_found(id))
    }

    #[instrument(skip(self))]
    async fn moderation_state(&self, id: CommentId) -> RepoResult<ModerationState> {
        let state = sqlx::query_scalar::<_, String>(
            r#"
            SELECT moderation_state FROM comments WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        state
            .map(|s| ModerationState::from_str_lossy(&s))
            .ok_or_else(|| comment_not_found(id))
    }

    #[instrument(skip(self))]
    async fn begin_moderation(&self, id: CommentId) -> RepoResult<bool> {
        // Compare-and-set: only a row still in 'visible' state is updated,
        // so exactly one of any number of racing callers wins.
        let result = sqlx::query(
            r#"
            UPDATE comments
            SET moderation_state = $2
            WHERE id = $1 AND moderation_state = $3
            "#,
        )
        .bind(id.into_inner())
        .bind(ModerationState::UnderModeration.as_str())
        .bind(ModerationState::Visible.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() == 1)
    }

    #[instrument(skip(self))]
    async fn is_moderated(&self, id: CommentId) -> RepoResult<bool> {
        let moderated = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT moderated FROM comments WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        moderated.ok_or_else(|| comment_not_found(id))
    }

    #[instrument(skip(self))]
    async fn set_moderated(&self, id: CommentId, moderated: bool) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE comments SET moderated = $2 WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .bind(moderated)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(comment_not_found(id));
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn reset_report_count(&self, id: CommentId) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE comments SET report_count = 0 WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(comment_not_found(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgCommentRepository>();
    }
}
