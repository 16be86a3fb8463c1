//! Ephemeral store implementations

pub mod fraud_record;

pub use fraud_record::RedisFraudRecordStore;
