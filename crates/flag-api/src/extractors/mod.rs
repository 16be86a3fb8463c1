//! Request extractors

pub mod requester;

pub use requester::{Requester, FLAG_TOKEN_COOKIE, STORAGE_CHECK_COOKIE};
