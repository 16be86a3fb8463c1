//! Flag history - validated per-identity mapping of comment id to flag count
//!
//! Both the client-held token and the server-held fraud record carry this
//! mapping. Decoding is strict: every entry must have a numeric key and a
//! numeric value, anything else is dropped rather than surfaced as an error.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::comment_id::CommentId;

/// Maximum number of comment entries tracked per identity.
///
/// Bounds the size of the client token; beyond the cap the entry with the
/// lowest comment id is evicted (ids are assigned monotonically by the
/// host, so lowest is effectively oldest).
pub const MAX_TRACKED_COMMENTS: usize = 64;

/// Per-identity flag counts, keyed by comment id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlagHistory {
    counts: BTreeMap<CommentId, u32>,
}

impl FlagHistory {
    /// Create an empty history
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a history from an untyped JSON value, dropping invalid entries
    ///
    /// Accepts only a JSON object; keys must parse as comment ids and values
    /// must be non-negative integers. Any other shape degrades to an empty
    /// (or partial) history.
    #[must_use]
    pub fn from_json(value: &serde_json::Value) -> Self {
        let mut history = Self::new();
        let Some(map) = value.as_object() else {
            return history;
        };

        for (key, val) in map {
            let Ok(id) = CommentId::parse(key) else {
                continue;
            };
            let Some(count) = val.as_u64() else {
                continue;
            };
            history.counts.insert(id, count.min(u64::from(u32::MAX)) as u32);
        }

        history.enforce_cap();
        history
    }

    /// Flag count recorded for a comment, if any
    #[must_use]
    pub fn count(&self, id: CommentId) -> Option<u32> {
        self.counts.get(&id).copied()
    }

    /// Whether this identity has flagged the comment before
    #[must_use]
    pub fn contains(&self, id: CommentId) -> bool {
        self.counts.contains_key(&id)
    }

    /// Record one more flag for a comment
    pub fn increment(&mut self, id: CommentId) {
        let entry = self.counts.entry(id).or_insert(0);
        *entry = entry.saturating_add(1);
        self.enforce_cap();
    }

    /// Number of tracked comments
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether the history is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over (comment id, count) entries
    pub fn iter(&self) -> impl Iterator<Item = (CommentId, u32)> + '_ {
        self.counts.iter().map(|(id, count)| (*id, *count))
    }

    fn enforce_cap(&mut self) {
        while self.counts.len() > MAX_TRACKED_COMMENTS {
            if let Some(oldest) = self.counts.keys().next().copied() {
                self.counts.remove(&oldest);
            }
        }
    }
}

impl FromIterator<(CommentId, u32)> for FlagHistory {
    fn from_iter<I: IntoIterator<Item = (CommentId, u32)>>(iter: I) -> Self {
        let mut history = Self {
            counts: iter.into_iter().collect(),
        };
        history.enforce_cap();
        history
    }
}
