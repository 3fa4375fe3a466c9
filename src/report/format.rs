//! Formatted terminal output for generated datasets and their views.
//!
//! We keep formatting code in one place so:
//! - the generation/aggregation code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use chrono::NaiveDate;
use nalgebra::DMatrix;

use crate::domain::{DailyRecord, DatasetStats, GroupKey, NumericField, ReportConfig};
use crate::stats::{FieldSummary, GroupStats};

/// Format the run header: inputs plus dataset shape.
pub fn format_run_summary(stats: &DatasetStats, config: &ReportConfig) -> String {
    let mut out = String::new();

    out.push_str("=== cafesim - Synthetic Cafe Sales ===\n");
    out.push_str(&format!("Days: {} | seed: {}\n", config.days, config.seed));
    out.push_str(&format!(
        "Records: n={} | dates=[{} .. {}] | items={}\n",
        stats.n_records, stats.date_min, stats.date_max, stats.n_items
    ));

    if config.filter_item.is_some() || config.filter_from.is_some() || config.filter_to.is_some() {
        out.push_str(&format!(
            "Filter: item={} | from={} | to={}\n",
            config
                .filter_item
                .map(|i| i.display_name())
                .unwrap_or("(any)"),
            config
                .filter_from
                .map(|d| d.to_string())
                .unwrap_or_else(|| "(open)".to_string()),
            config
                .filter_to
                .map(|d| d.to_string())
                .unwrap_or_else(|| "(open)".to_string()),
        ));
    }

    out.push('\n');
    out
}

/// Format the per-field summary statistics table.
pub fn format_summary_table(summary: &[(NumericField, FieldSummary)]) -> String {
    let mut out = String::new();

    out.push_str("Summary statistics:\n");
    out.push_str(&format!(
        "{:<14} {:>7} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10}\n",
        "field", "count", "mean", "std", "min", "p25", "p50", "p75", "max"
    ));
    out.push_str(&format!(
        "{:-<14} {:-<7} {:-<10} {:-<10} {:-<10} {:-<10} {:-<10} {:-<10} {:-<10}\n",
        "", "", "", "", "", "", "", "", ""
    ));

    for (field, s) in summary {
        out.push_str(&format!(
            "{:<14} {:>7} {:>10.2} {:>10.2} {:>10.2} {:>10.2} {:>10.2} {:>10.2} {:>10.2}\n",
            field.display_name(),
            s.count,
            s.mean,
            s.std,
            s.min,
            s.p25,
            s.p50,
            s.p75,
            s.max
        ));
    }

    out
}

/// Format the grouped-aggregates table for the chosen key.
pub fn format_group_table(groups: &[GroupStats], key: GroupKey) -> String {
    let mut out = String::new();

    out.push_str(&format!("Aggregates by {}:\n", key.display_name()));
    out.push_str(&format!(
        "{:<12} {:>6} {:>9} {:>8} {:>12} {:>10} {:>9} {:>9}\n",
        key.display_name(),
        "count",
        "qty_mean",
        "qty_std",
        "revenue_sum",
        "rev_mean",
        "temp",
        "humidity"
    ));
    out.push_str(&format!(
        "{:-<12} {:-<6} {:-<9} {:-<8} {:-<12} {:-<10} {:-<9} {:-<9}\n",
        "", "", "", "", "", "", "", ""
    ));

    for g in groups {
        out.push_str(&format!(
            "{:<12} {:>6} {:>9.2} {:>8.2} {:>12.2} {:>10.2} {:>9.2} {:>9.2}\n",
            g.key,
            g.count,
            g.quantity_mean,
            g.quantity_std,
            g.revenue_sum,
            g.revenue_mean,
            g.temperature_mean,
            g.humidity_mean
        ));
    }

    out
}

/// Format the tail of a per-date rollup (`top_n` most recent dates).
pub fn format_rollup(rollup: &[(NaiveDate, f64)], field: NumericField, top_n: usize) -> String {
    let mut out = String::new();

    let shown = rollup.len().min(top_n.max(1));
    out.push_str(&format!(
        "Daily {} (last {shown} of {} dates):\n",
        field.display_name(),
        rollup.len()
    ));
    out.push_str(&format!("{:<12} {:>14}\n", "date", "total"));
    out.push_str(&format!("{:-<12} {:-<14}\n", "", ""));

    for (date, total) in rollup.iter().skip(rollup.len() - shown) {
        out.push_str(&format!("{:<12} {:>14.2}\n", date.to_string(), total));
    }

    out
}

/// Format the correlation matrix with field labels on both axes.
pub fn format_corr_matrix(matrix: &DMatrix<f64>, fields: &[NumericField]) -> String {
    let mut out = String::new();

    out.push_str("Pearson correlation:\n");
    out.push_str(&format!("{:<14}", ""));
    for f in fields {
        out.push_str(&format!(" {:>13}", f.display_name()));
    }
    out.push('\n');

    for (i, f) in fields.iter().enumerate() {
        out.push_str(&format!("{:<14}", f.display_name()));
        for j in 0..fields.len() {
            let v = matrix[(i, j)];
            if v.is_nan() {
                out.push_str(&format!(" {:>13}", "nan"));
            } else {
                out.push_str(&format!(" {:>13.4}", v));
            }
        }
        out.push('\n');
    }

    out
}

/// Format simple-variant records, one line per day.
pub fn format_daily_records(records: &[DailyRecord]) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{:<12} {:>8} {:>8} {:>8} {:>9}\n",
        "date", "category", "sales", "temp", "humidity"
    ));
    out.push_str(&format!(
        "{:-<12} {:-<8} {:-<8} {:-<8} {:-<9}\n",
        "", "", "", "", ""
    ));

    for r in records {
        out.push_str(&format!(
            "{:<12} {:>8} {:>8} {:>8.2} {:>9.2}\n",
            r.date.to_string(),
            r.category.display_name(),
            r.sales,
            r.temperature,
            r.humidity
        ));
    }

    out
}
