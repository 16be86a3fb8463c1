//! Request handlers

pub mod flags;
pub mod health;
pub mod moderation;
