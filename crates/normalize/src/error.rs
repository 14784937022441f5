//! Normalization error model.

use storelens_core::EntityKind;
use thiserror::Error;

/// Error for a single record that could not be normalized.
///
/// Always scoped to one record; the collection entry point turns these into
/// skipped-record entries rather than propagating them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    /// Record did not match the expected source shape.
    #[error("malformed {kind} record: {message}")]
    Shape { kind: EntityKind, message: String },

    /// A required field was present but blank.
    #[error("blank required field: {0}")]
    BlankField(&'static str),
}

impl NormalizeError {
    pub fn shape(kind: EntityKind, err: impl std::fmt::Display) -> Self {
        Self::Shape {
            kind,
            message: err.to_string(),
        }
    }
}
