//! # flag-cache
//!
//! Redis layer for ephemeral fraud records and escalation pub/sub.
//!
//! ## Features
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **Fraud Records**: Fingerprint-keyed flag histories with automatic expiry
//! - **Pub/Sub**: Escalation event distribution to moderation consumers
//!
//! ## Example
//!
//! ```ignore
//! use flag_cache::{RedisPool, RedisPoolConfig, RedisFraudRecordStore, EscalationPublisher};
//!
//! let pool = RedisPool::new(RedisPoolConfig::default())?;
//!
//! let fraud_store = RedisFraudRecordStore::new(pool.clone());
//! let publisher = EscalationPublisher::new(pool.clone());
//! ```

pub mod events;
pub mod pool;
pub mod stores;

// Re-export pool types
pub use pool::{RedisPool, RedisPoolConfig, RedisPoolError, RedisResult, SharedRedisPool};

// Re-export store types
pub use stores::RedisFraudRecordStore;

// Re-export event types
pub use events::{EscalationPublisher, MODERATION_CHANNEL};
