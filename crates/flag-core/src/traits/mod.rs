//! Repository and port traits

pub mod repositories;

pub use repositories::{CommentRepository, EscalationNotifier, FraudRecordStore, RepoResult};
