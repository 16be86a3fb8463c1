//! Service implementations

pub mod context;
pub mod detector;
pub mod error;
pub mod flagging;
pub mod moderation;

#[cfg(test)]
pub(crate) mod support;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use detector::{DuplicateFlagDetector, FlagDecision};
pub use error::{ServiceError, ServiceResult};
pub use flagging::{FlagOutcome, FlagService};
pub use moderation::ModerationService;
