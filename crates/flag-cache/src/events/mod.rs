//! Escalation event publishing

pub mod publisher;

pub use publisher::{EscalationPublisher, MODERATION_CHANNEL};
