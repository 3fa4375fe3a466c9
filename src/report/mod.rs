//! Terminal report formatting.

pub mod format;

pub use format::{
    format_corr_matrix, format_daily_records, format_group_table, format_rollup,
    format_run_summary, format_summary_table,
};
