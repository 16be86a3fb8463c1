//! Anonymous requester context
//!
//! Everything the flagging flow knows about the caller. There is no account
//! identity; the fingerprint is derived from the network address and the
//! token is whatever the client chose to send back.

use flag_core::value_objects::Fingerprint;

/// Context describing the anonymous client submitting a flag
#[derive(Debug, Clone)]
pub struct RequesterContext {
    /// Network-derived fingerprint (hashed before storage)
    pub fingerprint: Fingerprint,
    /// Opaque flag token presented by the client, if any
    pub client_token: Option<String>,
    /// Whether the client proved it can persist tokens (storage probe
    /// round-tripped). Unconfirmed clients get the strict duplicate rules.
    pub storage_confirmed: bool,
}

impl RequesterContext {
    /// Create a requester context
    #[must_use]
    pub fn new(
        fingerprint: Fingerprint,
        client_token: Option<String>,
        storage_confirmed: bool,
    ) -> Self {
        Self {
            fingerprint,
            client_token,
            storage_confirmed,
        }
    }

    /// A requester that presented nothing at all
    #[must_use]
    pub fn anonymous(fingerprint: Fingerprint) -> Self {
        Self::new(fingerprint, None, false)
    }
}
