//! Shared deserialization helpers for the raw source shapes.
//!
//! The upstream systems disagree on scalar encodings (ids arrive as numbers
//! or strings depending on the source), so the raw structs coerce everything
//! key-like to `String` at the boundary.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use storelens_core::UNKNOWN;

/// Default for fields that fall back to the `"Unknown"` sentinel.
pub(crate) fn unknown() -> String {
    UNKNOWN.to_string()
}

/// Deserialize a value that could be either a string or a number into a
/// `String`. Anything else is a shape error for the record.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        _ => Err(serde::de::Error::custom("expected string or number")),
    }
}

/// Same coercion for an optional field: absent or null maps to `None`.
pub(crate) fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(_) => Err(serde::de::Error::custom("expected string or number")),
    }
}

/// Missing or null scalar maps to the `"Unknown"` sentinel, never to null.
/// Numbers get the same string coercion as everywhere else.
pub(crate) fn string_or_unknown<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(unknown()),
        Some(Value::String(s)) => Ok(s),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(_) => Err(serde::de::Error::custom("expected string or number")),
    }
}
