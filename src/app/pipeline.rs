//! Shared "generate and analyze" pipeline used by every CLI command.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! generate -> filter -> stats/summary/groups/rollup
//!
//! The CLI commands then focus on presentation (which tables to print) and
//! on optional exports.

use chrono::NaiveDate;

use crate::data::{compute_stats, generate_sales};
use crate::domain::{DatasetStats, NumericField, ReportConfig, SalesRecord};
use crate::error::AppError;
use crate::stats::{
    FieldSummary, GroupStats, RecordFilter, daily_rollup, filter_records, group_by_key,
    summary_stats,
};

/// All computed outputs of a single run.
///
/// `records` is the full generated dataset; every view below is computed on
/// the filtered subset (which is the full dataset when no filter is set).
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub records: Vec<SalesRecord>,
    pub filtered: Vec<SalesRecord>,
    pub stats: Option<DatasetStats>,
    pub summary: Option<Vec<(NumericField, FieldSummary)>>,
    pub groups: Vec<GroupStats>,
    pub revenue_rollup: Vec<(NaiveDate, f64)>,
}

/// Execute the full pipeline and return the computed outputs.
pub fn run_report(config: &ReportConfig) -> Result<RunOutput, AppError> {
    // 1) Generate the dataset (new value each run; nothing is mutated).
    let records = generate_sales(config.days, config.seed)?;

    // 2) Apply the configured predicate.
    let filter = RecordFilter {
        item_type: config.filter_item,
        from: config.filter_from,
        to: config.filter_to,
    };
    let filtered = if filter.is_empty() {
        records.clone()
    } else {
        filter_records(&records, &filter)
    };

    // 3) Derived views over the filtered subset. An empty subset is a valid
    //    outcome: stats/summary become None and the tables come out empty.
    let stats = compute_stats(&filtered);
    let summary = summary_stats(&filtered);
    let groups = group_by_key(&filtered, config.group_by);
    let revenue_rollup = daily_rollup(&filtered, NumericField::Revenue);

    Ok(RunOutput {
        records,
        filtered,
        stats,
        summary,
        groups,
        revenue_rollup,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GroupKey, ItemType};

    fn config(days: usize) -> ReportConfig {
        ReportConfig {
            days,
            seed: 42,
            filter_item: None,
            filter_from: None,
            filter_to: None,
            group_by: GroupKey::ItemType,
            top_n: 10,
            export_csv: None,
            export_summary: None,
        }
    }

    #[test]
    fn unfiltered_run_covers_full_dataset() {
        let run = run_report(&config(10)).unwrap();
        assert_eq!(run.records.len(), 80);
        assert_eq!(run.filtered.len(), 80);
        assert_eq!(run.stats.as_ref().unwrap().n_records, 80);
        assert_eq!(run.revenue_rollup.len(), 10);
        assert_eq!(run.groups.len(), 8);
    }

    #[test]
    fn item_filter_narrows_views() {
        let mut cfg = config(10);
        cfg.filter_item = Some(ItemType::Tea);

        let run = run_report(&cfg).unwrap();
        assert_eq!(run.records.len(), 80);
        assert_eq!(run.filtered.len(), 10);
        assert_eq!(run.groups.len(), 1);
        assert_eq!(run.groups[0].key, ItemType::Tea.display_name());
    }

    #[test]
    fn date_grouping_yields_one_group_per_day() {
        let mut cfg = config(10);
        cfg.group_by = GroupKey::Date;

        let run = run_report(&cfg).unwrap();
        assert_eq!(run.groups.len(), 10);
        assert!(run.groups.iter().all(|g| g.count == 8));
    }

    #[test]
    fn empty_match_is_a_valid_run() {
        let mut cfg = config(5);
        cfg.filter_from = NaiveDate::from_ymd_opt(2030, 1, 1);

        let run = run_report(&cfg).unwrap();
        assert!(run.filtered.is_empty());
        assert!(run.stats.is_none());
        assert!(run.summary.is_none());
        assert!(run.groups.is_empty());
        assert!(run.revenue_rollup.is_empty());
    }

    #[test]
    fn zero_days_is_rejected() {
        assert!(run_report(&config(0)).is_err());
    }
}
