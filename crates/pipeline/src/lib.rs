//! `storelens-pipeline` — fetch, normalize, enrich and aggregate in one pass.
//!
//! The pipeline's product is the [`Snapshot`]: an immutable bundle of every
//! normalized collection, both enrichment joins, both insight bundles and a
//! report of what went wrong along the way. Refreshing data means building a
//! new snapshot and swapping it in whole; nothing ever mutates one in place.

/// Flat-file JSON persistence for snapshots.
pub mod persist;

/// What a snapshot build skipped or failed to fetch.
pub mod report;

/// The snapshot itself and the entry points that build one.
pub mod snapshot;

pub use persist::{write_snapshot_files, SNAPSHOT_FILES};
pub use report::PipelineReport;
pub use snapshot::{build_snapshot, run, Snapshot};
