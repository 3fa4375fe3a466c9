//! Read/write run-summary JSON files.
//!
//! Summary JSON is the "portable" representation of one generation run:
//! - the run inputs (day count + seed)
//! - dataset shape
//! - the per-field summary table and grouped aggregates
//!
//! It lets downstream scripts diff two runs without re-parsing CSV exports,
//! and `cafesim show` prints a saved file back as tables.

use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{DatasetStats, GroupKey, NumericField};
use crate::error::AppError;
use crate::stats::{FieldSummary, GroupStats};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryFile {
    pub tool: String,
    pub days: usize,
    pub seed: u64,
    pub stats: DatasetStats,
    pub summary: Vec<(NumericField, FieldSummary)>,
    pub group_by: GroupKey,
    pub groups: Vec<GroupStats>,
}

/// Write a summary JSON file.
pub fn write_summary_json(path: &Path, summary: &SummaryFile) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create summary JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, summary)
        .map_err(|e| AppError::new(2, format!("Failed to write summary JSON: {e}")))?;

    Ok(())
}

/// Read a summary JSON file.
pub fn read_summary_json(path: &Path) -> Result<SummaryFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open summary JSON '{}': {e}", path.display())))?;
    let summary: SummaryFile =
        serde_json::from_reader(file).map_err(|e| AppError::new(2, format!("Invalid summary JSON: {e}")))?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{compute_stats, generate_sales};
    use crate::stats::{group_by_item, summary_stats};

    fn sample_summary() -> SummaryFile {
        let records = generate_sales(5, 42).unwrap();
        SummaryFile {
            tool: "cafesim".to_string(),
            days: 5,
            seed: 42,
            stats: compute_stats(&records).unwrap(),
            summary: summary_stats(&records).unwrap(),
            group_by: GroupKey::ItemType,
            groups: group_by_item(&records),
        }
    }

    #[test]
    fn summary_file_serializes_and_parses() {
        let file = sample_summary();

        let json = serde_json::to_string(&file).unwrap();
        let parsed: SummaryFile = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.days, 5);
        assert_eq!(parsed.stats.n_records, 40);
        assert_eq!(parsed.summary.len(), file.summary.len());
        assert_eq!(parsed.groups.len(), 8);
    }

    #[test]
    fn summary_file_round_trips_through_disk() {
        let written = sample_summary();
        let path = std::env::temp_dir().join(format!(
            "cafesim-summary-test-{}.json",
            std::process::id()
        ));

        write_summary_json(&path, &written).unwrap();
        let read = read_summary_json(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(read.days, written.days);
        assert_eq!(read.seed, written.seed);
        assert_eq!(read.stats.n_records, written.stats.n_records);
        assert_eq!(read.summary, written.summary);
        assert_eq!(read.groups, written.groups);
    }

    #[test]
    fn reading_a_missing_file_is_an_error() {
        let path = std::env::temp_dir().join("cafesim-summary-test-missing.json");
        assert!(read_summary_json(&path).is_err());
    }
}
