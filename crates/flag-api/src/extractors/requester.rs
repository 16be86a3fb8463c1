//! Requester extractor
//!
//! Builds the anonymous requester context from the connection: the network
//! fingerprint, the flag token cookie, and whether the client round-tripped
//! the storage probe. Extraction never fails; a client that sends nothing is
//! simply an unconfirmed requester.

use std::net::SocketAddr;

use axum::async_trait;
use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;
use flag_core::value_objects::Fingerprint;
use flag_service::RequesterContext;

use crate::state::AppState;

/// Cookie holding the client's flag token
pub const FLAG_TOKEN_COOKIE: &str = "flag_token";

/// Cookie proving the client can persist cookies at all
pub const STORAGE_CHECK_COOKIE: &str = "flag_storage_check";

/// Extractor wrapping the requester context
#[derive(Debug, Clone)]
pub struct Requester(pub RequesterContext);

#[async_trait]
impl FromRequestParts<AppState> for Requester {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        let client_token = jar
            .get(FLAG_TOKEN_COOKIE)
            .map(|c| c.value().to_string());

        // Either the probe cookie or an existing token proves the client
        // persists cookies.
        let storage_confirmed = jar.get(STORAGE_CHECK_COOKIE).is_some() || client_token.is_some();

        let fingerprint = Fingerprint::new(client_ip(parts));

        Ok(Self(RequesterContext::new(
            fingerprint,
            client_token,
            storage_confirmed,
        )))
    }
}

/// Best-effort client address for fingerprinting
///
/// Proxy headers win over the peer address so deployments behind a reverse
/// proxy fingerprint the real client, not the proxy.
fn client_ip(parts: &Parts) -> String {
    if let Some(forwarded) = parts
        .headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
    {
        if let Some(first) = forwarded.split(',').next() {
            let trimmed = first.trim();
            if !trimmed.is_empty() {
                return trimmed.to_string();
            }
        }
    }

    if let Some(real_ip) = parts
        .headers
        .get("x-real-ip")
        .and_then(|v| v.to_str().ok())
    {
        let trimmed = real_ip.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    parts
        .extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
