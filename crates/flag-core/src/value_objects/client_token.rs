//! Client token encoding - the client-held half of the dual flag store
//!
//! The token is base64 over a JSON object mapping comment id to flag count.
//! It is opaque but self-describing: no key material is needed to decode,
//! which is fine because it carries nothing but counts. Decoding never
//! fails; garbage degrades to an empty history and the server-side fraud
//! record remains the backstop.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use super::flag_history::FlagHistory;

/// Encode a flag history into an opaque client token
#[must_use]
pub fn encode(history: &FlagHistory) -> String {
    let entries: serde_json::Map<String, serde_json::Value> = history
        .iter()
        .map(|(id, count)| (id.to_string(), serde_json::Value::from(count)))
        .collect();

    // Serializing a string-keyed map cannot fail
    let json = serde_json::Value::Object(entries).to_string();
    BASE64.encode(json)
}

/// Decode a client token, tolerating arbitrary garbage
///
/// Invalid base64, invalid JSON, a non-object payload, or malformed
/// entries all degrade towards an empty history instead of an error.
#[must_use]
pub fn decode(token: &str) -> FlagHistory {
    let Ok(bytes) = BASE64.decode(token.trim()) else {
        return FlagHistory::new();
    };
    let Ok(value) = serde_json::from_slice::<serde_json::Value>(&bytes) else {
        return FlagHistory::new();
    };
    FlagHistory::from_json(&value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::CommentId;

    #[test]
    fn test_roundtrip() {
        let mut history = FlagHistory::new();
        history.increment(CommentId::new(3));
        history.increment(CommentId::new(3));
        history.increment(CommentId::new(9));

        let token = encode(&history);
        let decoded = decode(&token);

        assert_eq!(decoded, history);
    }

    #[test]
    fn test_empty_history_roundtrip() {
        let token = encode(&FlagHistory::new());
        assert!(decode(&token).is_empty());
    }

    #[test]
    fn test_decode_garbage_is_empty() {
        assert!(decode("not!!base64!!").is_empty());
        assert!(decode("").is_empty());
        // Valid base64, invalid JSON
        let token = BASE64.encode("{{{{");
        assert!(decode(&token).is_empty());
        // Valid JSON, wrong shape
        let token = BASE64.encode("[1,2,3]");
        assert!(decode(&token).is_empty());
    }

    #[test]
    fn test_decode_drops_non_numeric_counts() {
        let token = BASE64.encode(r#"{"5":"lots","6":2}"#);
        let decoded = decode(&token);

        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded.count(CommentId::new(6)), Some(2));
    }

    #[test]
    fn test_decode_tolerates_surrounding_whitespace() {
        let mut history = FlagHistory::new();
        history.increment(CommentId::new(1));
        let token = format!("  {}\n", encode(&history));

        assert_eq!(decode(&token), history);
    }
}
