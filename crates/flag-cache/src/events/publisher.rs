//! Redis Pub/Sub publisher for escalation events.
//!
//! Moderation consumers (dashboards, mail notifiers) subscribe to the
//! moderation channel and react to escalations. Delivery is best-effort:
//! a publish failure is logged by the caller and never fails the flag
//! request that triggered it.

use async_trait::async_trait;
use redis::AsyncCommands;

use flag_core::error::DomainError;
use flag_core::events::{CommentEscalatedEvent, DomainEvent};
use flag_core::traits::{EscalationNotifier, RepoResult};

use crate::pool::RedisPool;

/// Channel that carries moderation escalation events
pub const MODERATION_CHANNEL: &str = "flagpost:moderation";

/// Redis Pub/Sub publisher for escalation events
#[derive(Clone)]
pub struct EscalationPublisher {
    pool: RedisPool,
    channel: String,
}

impl EscalationPublisher {
    /// Create a new publisher on the default moderation channel
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self {
            pool,
            channel: MODERATION_CHANNEL.to_string(),
        }
    }

    /// Create a publisher on a custom channel
    #[must_use]
    pub fn with_channel(pool: RedisPool, channel: impl Into<String>) -> Self {
        Self {
            pool,
            channel: channel.into(),
        }
    }

    async fn publish_event(&self, event: &DomainEvent) -> RepoResult<u32> {
        let payload =
            serde_json::to_string(event).map_err(|e| DomainError::CacheError(e.to_string()))?;

        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| DomainError::CacheError(e.to_string()))?;

        let receivers: u32 = conn
            .publish(&self.channel, &payload)
            .await
            .map_err(|e| DomainError::CacheError(e.to_string()))?;

        tracing::debug!(
            channel = %self.channel,
            event_type = %event.event_type(),
            receivers = receivers,
            "Published escalation event"
        );

        Ok(receivers)
    }
}

#[async_trait]
impl EscalationNotifier for EscalationPublisher {
    async fn notify(&self, event: &CommentEscalatedEvent) -> RepoResult<()> {
        self.publish_event(&DomainEvent::CommentEscalated(event.clone()))
            .await?;
        Ok(())
    }
}
