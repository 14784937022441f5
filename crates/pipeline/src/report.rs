use serde::{Deserialize, Serialize};

use storelens_normalize::SkippedRecord;
use storelens_sources::SourceFailure;

/// Everything a snapshot build dropped on the floor, kept next to the data
/// it shaped.
///
/// An empty report means every source answered and every record normalized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineReport {
    /// Sources that failed wholesale; their collections are empty.
    pub source_failures: Vec<SourceFailure>,
    /// Individual records that failed normalization.
    pub skipped_records: Vec<SkippedRecord>,
}

impl PipelineReport {
    pub fn is_clean(&self) -> bool {
        self.source_failures.is_empty() && self.skipped_records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storelens_core::EntityKind;

    #[test]
    fn empty_report_is_clean() {
        assert!(PipelineReport::default().is_clean());
    }

    #[test]
    fn any_failure_or_skip_marks_the_report_dirty() {
        let failed_fetch = PipelineReport {
            source_failures: vec![SourceFailure {
                source: "products".to_string(),
                reason: "timed out".to_string(),
            }],
            skipped_records: Vec::new(),
        };
        assert!(!failed_fetch.is_clean());

        let skipped_record = PipelineReport {
            source_failures: Vec::new(),
            skipped_records: vec![SkippedRecord {
                entity_type: EntityKind::User,
                index: 3,
                reason: "missing name".to_string(),
            }],
        };
        assert!(!skipped_record.is_clean());
    }

    #[test]
    fn report_serializes_with_both_sections() {
        let report = PipelineReport {
            source_failures: vec![SourceFailure {
                source: "users".to_string(),
                reason: "connection refused".to_string(),
            }],
            skipped_records: vec![SkippedRecord {
                entity_type: EntityKind::Product,
                index: 0,
                reason: "missing field `id`".to_string(),
            }],
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["source_failures"][0]["source"], "users");
        assert_eq!(json["skipped_records"][0]["entity_type"], "product");
        assert_eq!(json["skipped_records"][0]["index"], 0);
    }
}
