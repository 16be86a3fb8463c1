//! Repository implementations

pub mod comment;
pub mod error;

pub use comment::PgCommentRepository;
