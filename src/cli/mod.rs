//! Command-line parsing for the synthetic sales generator.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the generation/aggregation code.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::domain::{GroupKey, ItemType, NumericField};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "cafesim", version, about = "Synthetic cafe sales generator and analytics")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a dataset and print overview, summary stats, grouped
    /// aggregates, and the daily revenue trend; optionally export.
    Report(ReportArgs),
    /// Print the per-date rollup of one numeric field.
    Rollup(RollupArgs),
    /// Print the Pearson correlation matrix of the numeric fields.
    Corr(GenArgs),
    /// Generate a dataset, apply filters, and write it to CSV.
    Export(ExportArgs),
    /// Print the tables of a previously exported summary JSON.
    Show(ShowArgs),
    /// Run the simple one-record-per-day variant and print its records.
    Daily(DailyArgs),
}

/// Common options for generation and filtering.
#[derive(Debug, Parser, Clone)]
pub struct GenArgs {
    /// Number of calendar days to simulate.
    #[arg(short = 'n', long, default_value_t = 100)]
    pub days: usize,

    /// Random seed; the same (days, seed) reproduces the dataset exactly.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Only keep records of this item type.
    #[arg(long, value_enum)]
    pub item: Option<ItemType>,

    /// Only keep records on or after this date (YYYY-MM-DD).
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Only keep records on or before this date (YYYY-MM-DD).
    #[arg(long)]
    pub to: Option<NaiveDate>,

    /// Rollup rows shown in the report.
    #[arg(long, default_value_t = 10)]
    pub top: usize,
}

/// Options for the report command.
#[derive(Debug, Parser)]
pub struct ReportArgs {
    #[command(flatten)]
    pub common: GenArgs,

    /// Which key the grouped-aggregates table is keyed on.
    #[arg(long = "group-by", value_enum, default_value_t = GroupKey::ItemType)]
    pub group_by: GroupKey,

    /// Export the (filtered) dataset to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export the run summary (stats + groups) to JSON.
    #[arg(long = "export-summary")]
    pub export_summary: Option<PathBuf>,
}

/// Options for the rollup command.
#[derive(Debug, Parser)]
pub struct RollupArgs {
    #[command(flatten)]
    pub common: GenArgs,

    /// Which numeric field to sum per date.
    #[arg(long, value_enum, default_value_t = NumericField::Revenue)]
    pub field: NumericField,
}

/// Options for the export command.
#[derive(Debug, Parser)]
pub struct ExportArgs {
    #[command(flatten)]
    pub common: GenArgs,

    /// Output CSV path.
    #[arg(long, value_name = "CSV")]
    pub out: PathBuf,
}

/// Options for showing a saved summary.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Summary JSON file produced by `cafesim report --export-summary`.
    #[arg(long, value_name = "JSON")]
    pub summary: PathBuf,
}

/// Options for the simple per-day variant.
#[derive(Debug, Parser)]
pub struct DailyArgs {
    /// Number of calendar days to simulate.
    #[arg(short = 'n', long, default_value_t = 100)]
    pub days: usize,

    /// Random seed.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Only keep records of this category.
    #[arg(long, value_enum)]
    pub category: Option<crate::domain::Category>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_flags_only_exist_on_report() {
        assert!(Cli::try_parse_from(["cafesim", "report", "--export", "out.csv"]).is_ok());
        assert!(
            Cli::try_parse_from(["cafesim", "report", "--export-summary", "out.json"]).is_ok()
        );

        assert!(Cli::try_parse_from(["cafesim", "rollup", "--export", "out.csv"]).is_err());
        assert!(Cli::try_parse_from(["cafesim", "corr", "--export", "out.csv"]).is_err());
        assert!(
            Cli::try_parse_from(["cafesim", "export", "--out", "o.csv", "--export-summary", "s"])
                .is_err()
        );
    }

    #[test]
    fn shared_generation_flags_parse_everywhere() {
        for cmd in ["report", "rollup", "corr"] {
            let argv = ["cafesim", cmd, "-n", "30", "--seed", "7", "--item", "tea"];
            assert!(Cli::try_parse_from(argv).is_ok(), "failed for {cmd}");
        }
    }

    #[test]
    fn show_requires_a_summary_path() {
        assert!(Cli::try_parse_from(["cafesim", "show"]).is_err());
        assert!(Cli::try_parse_from(["cafesim", "show", "--summary", "run.json"]).is_ok());
    }
}
