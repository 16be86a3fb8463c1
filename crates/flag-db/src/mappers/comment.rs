//! Comment entity <-> model mapper

use flag_core::entities::{Comment, ModerationState};
use flag_core::value_objects::CommentId;

use crate::models::CommentModel;

/// Convert CommentModel to Comment entity
impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: CommentId::new(model.id),
            report_count: model.report_count,
            state: ModerationState::from_str_lossy(&model.moderation_state),
            moderated: model.moderated,
            created_at: model.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_model_to_entity() {
        let model = CommentModel {
            id: 7,
            report_count: 2,
            moderation_state: "under_moderation".to_string(),
            moderated: true,
            created_at: Utc::now(),
        };

        let comment = Comment::from(model);
        assert_eq!(comment.id, CommentId::new(7));
        assert_eq!(comment.report_count, 2);
        assert_eq!(comment.state, ModerationState::UnderModeration);
        assert!(comment.moderated);
    }

    #[test]
    fn test_unknown_state_degrades_to_visible() {
        let model = CommentModel {
            id: 1,
            report_count: 0,
            moderation_state: "whatever".to_string(),
            moderated: false,
            created_at: Utc::now(),
        };

        assert_eq!(Comment::from(model).state, ModerationState::Visible);
    }
}
