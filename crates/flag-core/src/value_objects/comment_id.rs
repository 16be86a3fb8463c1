//! Comment ID - opaque numeric identifier assigned by the host content system

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Identifier of a flaggable comment (64-bit, host-assigned)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CommentId(i64);

impl CommentId {
    /// Create a new CommentId from a raw i64 value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Parse from string representation
    ///
    /// Only positive decimal integers are valid; anything else is rejected
    /// before a single store access happens.
    pub fn parse(s: &str) -> Result<Self, CommentIdParseError> {
        match s.parse::<i64>() {
            Ok(id) if id > 0 => Ok(Self(id)),
            _ => Err(CommentIdParseError::InvalidFormat),
        }
    }
}

/// Error when parsing a CommentId from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CommentIdParseError {
    #[error("invalid comment id format")]
    InvalidFormat,
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for CommentId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<CommentId> for i64 {
    fn from(id: CommentId) -> Self {
        id.0
    }
}

impl std::str::FromStr for CommentId {
    type Err = CommentIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CommentId::parse(s)
    }
}

// Serialize as string for JSON (JavaScript BigInt safety)
impl Serialize for CommentId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

// Deserialize from string or number
impl<'de> Deserialize<'de> for CommentId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct CommentIdVisitor;

        impl Visitor<'_> for CommentIdVisitor {
            type Value = CommentId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or integer representing a comment ID")
            }

            fn visit_i64<E>(self, value: i64) -> Result<CommentId, E>
            where
                E: de::Error,
            {
                Ok(CommentId(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<CommentId, E>
            where
                E: de::Error,
            {
                Ok(CommentId(value as i64))
            }

            fn visit_str<E>(self, value: &str) -> Result<CommentId, E>
            where
                E: de::Error,
            {
                CommentId::parse(value).map_err(|_| {
                    de::Error::invalid_value(de::Unexpected::Str(value), &"a numeric comment ID")
                })
            }
        }

        deserializer.deserialize_any(CommentIdVisitor)
    }
}
