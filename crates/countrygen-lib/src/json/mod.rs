//! Thin wrapper over `serde_json` providing a consistent serialization interface.
//!
//! Besides the serde round-trips this module owns the string-literal escaping
//! used by the code generator, so every JSON concern lives in one place.

use serde::{de::DeserializeOwned, Serialize};

/// Serialize a value to a JSON string.
pub fn serialize<T: Serialize>(value: &T) -> crate::errors::Result<String> {
    serde_json::to_string(value).map_err(Into::into)
}

/// Deserialize a JSON string into a value.
pub fn deserialize<T: DeserializeOwned>(json: &str) -> crate::errors::Result<T> {
    serde_json::from_str(json).map_err(Into::into)
}

/// Quote `s` as a JSON string literal.
///
/// `"` and `\` are escaped, control characters become escape sequences and
/// everything else, non-ASCII included, is emitted verbatim.
pub fn quote(s: &str) -> crate::errors::Result<String> {
    serialize(&s)
}
