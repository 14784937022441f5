//! Core model error.

use thiserror::Error;

/// Error for the model layer.
///
/// Keep this focused on deterministic parse/shape failures. Fetch and
/// normalization concerns carry their own error types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// An entity-kind string did not name a known kind.
    #[error("unknown entity type: {0}")]
    UnknownEntityKind(String),
}

impl CoreError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn unknown_entity_kind(msg: impl Into<String>) -> Self {
        Self::UnknownEntityKind(msg.into())
    }
}
