//! Domain entities

pub mod comment;

pub use comment::{Comment, ModerationState};
