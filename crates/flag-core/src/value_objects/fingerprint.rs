//! Client fingerprint - coarse reporter identity derived from network address
//!
//! The fingerprint is deliberately coarse (one per network address, not per
//! individual); the fraud record keyed by it is the fallback defense against
//! clients that discard or fabricate their token.

use std::fmt;

use sha2::{Digest, Sha256};

/// Namespace mixed into the hash so fraud keys cannot collide with other
/// deployments sharing the same store.
const FINGERPRINT_NAMESPACE: &str = "flagpost_flags";

/// Raw coarse client identifier (typically the client IP)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Create a fingerprint from its raw source value
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The raw source value
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derive the hashed store key for this fingerprint
    #[must_use]
    pub fn hashed(&self) -> FingerprintHash {
        let mut hasher = Sha256::new();
        hasher.update(FINGERPRINT_NAMESPACE.as_bytes());
        hasher.update(self.0.as_bytes());
        let digest = hasher.finalize();

        let mut hex = String::with_capacity(digest.len() * 2);
        for byte in digest {
            use fmt::Write;
            let _ = write!(hex, "{byte:02x}");
        }
        FingerprintHash(hex)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hashed fingerprint used as the fraud record key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FingerprintHash(String);

impl FingerprintHash {
    /// The hex-encoded digest
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FingerprintHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_stable() {
        let a = Fingerprint::new("203.0.113.7").hashed();
        let b = Fingerprint::new("203.0.113.7").hashed();
        assert_eq!(a, b);
    }

    #[test]
    fn test_hash_differs_per_source() {
        let a = Fingerprint::new("203.0.113.7").hashed();
        let b = Fingerprint::new("203.0.113.8").hashed();
        assert_ne!(a, b);
    }

    #[test]
    fn test_hash_is_hex_sha256() {
        let hash = Fingerprint::new("198.51.100.1").hashed();
        assert_eq!(hash.as_str().len(), 64);
        assert!(hash.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }
}
