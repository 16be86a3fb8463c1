//! Domain events

pub mod domain_event;

pub use domain_event::{CommentEscalatedEvent, CommentFlaggedEvent, DomainEvent};
