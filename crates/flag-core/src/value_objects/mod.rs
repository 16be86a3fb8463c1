//! Value objects - immutable domain values with validation

pub mod client_token;
pub mod comment_id;
pub mod fingerprint;
pub mod flag_history;

pub use comment_id::{CommentId, CommentIdParseError};
pub use fingerprint::{Fingerprint, FingerprintHash};
pub use flag_history::{FlagHistory, MAX_TRACKED_COMMENTS};
