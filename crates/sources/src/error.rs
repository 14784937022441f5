//! Fetch-layer error model.

use thiserror::Error;

/// Error raised by a single source fetch.
///
/// Callers going through [`crate::fetch_all`] never see these; that path
/// absorbs them into per-source failure records.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (connect, timeout, non-success status).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Body was not valid JSON of the expected shape.
    #[error("invalid JSON payload: {0}")]
    Decode(#[from] serde_json::Error),
}
