//! # flag-core
//!
//! Domain layer containing entities, value objects, repository traits, and domain events.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod events;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Comment, ModerationState};
pub use error::DomainError;
pub use events::{CommentEscalatedEvent, CommentFlaggedEvent, DomainEvent};
pub use traits::{CommentRepository, EscalationNotifier, FraudRecordStore, RepoResult};
pub use value_objects::{
    client_token, CommentId, CommentIdParseError, Fingerprint, FingerprintHash, FlagHistory,
    MAX_TRACKED_COMMENTS,
};
