//! `storelens-sources` — HTTP fetch layer for the three upstream collections.
//!
//! Raw records are kept as opaque JSON values; shape decisions belong to the
//! normalizer. Timeouts live here (and only here). A failed source degrades to
//! an empty collection plus a recorded failure, never an error.

pub mod client;
pub mod config;
pub mod error;

pub use client::{fetch_all, DataSource, FetchOutcome, HttpSource, SourceFailure};
pub use config::SourceConfig;
pub use error::FetchError;
