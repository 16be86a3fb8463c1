//! Database models

pub mod comment;

pub use comment::CommentModel;
