//! Response DTOs for the admin surface.

use chrono::{DateTime, Utc};
use serde::Serialize;

use storelens_pipeline::{PipelineReport, Snapshot};

/// Counts summarizing a freshly built snapshot.
#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub built_at: DateTime<Utc>,
    pub products: usize,
    pub users: usize,
    pub transactions: usize,
    pub skipped_records: usize,
    pub source_failures: usize,
}

impl RefreshResponse {
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self {
            built_at: snapshot.built_at(),
            products: snapshot.products().len(),
            users: snapshot.users().len(),
            transactions: snapshot.transactions().len(),
            skipped_records: snapshot.report().skipped_records.len(),
            source_failures: snapshot.report().source_failures.len(),
        }
    }
}

/// Full build report for the snapshot currently being served.
#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub built_at: DateTime<Utc>,
    #[serde(flatten)]
    pub report: PipelineReport,
}

impl ReportResponse {
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self {
            built_at: snapshot.built_at(),
            report: snapshot.report().clone(),
        }
    }
}
