//! Fraud record storage in Redis.
//!
//! Stores fingerprint-keyed flag histories with automatic expiration. This is
//! the server-side track of duplicate detection; records that lapse simply
//! disappear and the fingerprint starts over with a clean history.

use std::time::Duration;

use async_trait::async_trait;

use flag_core::error::DomainError;
use flag_core::traits::{FraudRecordStore, RepoResult};
use flag_core::value_objects::{FingerprintHash, FlagHistory};

use crate::pool::RedisPool;

/// Key prefix for fraud records
const FRAUD_RECORD_PREFIX: &str = "fraud:";

/// Redis-backed fraud record store
#[derive(Clone)]
pub struct RedisFraudRecordStore {
    pool: RedisPool,
}

impl RedisFraudRecordStore {
    /// Create a new fraud record store
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self { pool }
    }

    /// Generate Redis key for a fingerprint
    fn key(fingerprint: &FingerprintHash) -> String {
        format!("{FRAUD_RECORD_PREFIX}{}", fingerprint.as_str())
    }
}

#[async_trait]
impl FraudRecordStore for RedisFraudRecordStore {
    async fn get(&self, fingerprint: &FingerprintHash) -> RepoResult<Option<FlagHistory>> {
        let key = Self::key(fingerprint);
        self.pool
            .get_value(&key)
            .await
            .map_err(|e| DomainError::CacheError(e.to_string()))
    }

    async fn put(
        &self,
        fingerprint: &FingerprintHash,
        history: &FlagHistory,
        ttl: Duration,
    ) -> RepoResult<()> {
        let key = Self::key(fingerprint);

        // SET with EX refreshes the expiry on every write, so an active
        // fingerprint keeps its record alive.
        self.pool
            .set(&key, history, Some(ttl.as_secs()))
            .await
            .map_err(|e| DomainError::CacheError(e.to_string()))?;

        tracing::debug!(
            fingerprint = %fingerprint,
            entries = history.len(),
            ttl_secs = ttl.as_secs(),
            "Stored fraud record"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flag_core::value_objects::Fingerprint;

    #[test]
    fn test_key_generation() {
        let hash = Fingerprint::new("203.0.113.7").hashed();
        let key = RedisFraudRecordStore::key(&hash);
        assert!(key.starts_with("fraud:"));
        assert_eq!(key.len(), "fraud:".len() + 64);
    }

    #[test]
    fn test_store_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RedisFraudRecordStore>();
    }
}
