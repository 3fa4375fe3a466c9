//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs the generate/analyze pipeline
//! - prints reports
//! - writes optional exports

use clap::Parser;

use crate::cli::{Command, DailyArgs, ExportArgs, GenArgs, ReportArgs, RollupArgs, ShowArgs};
use crate::domain::{GroupKey, NumericField, ReportConfig};
use crate::error::AppError;
use crate::io::summary::SummaryFile;

pub mod pipeline;

/// Entry point for the `cafesim` binary.
pub fn run() -> Result<(), AppError> {
    // We want bare `cafesim` and `cafesim -n 200` to behave like
    // `cafesim report ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of
    // the argv list before parsing. This preserves a clean clap structure
    // while retaining the convenient default.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Report(args) => handle_report(args),
        Command::Rollup(args) => handle_rollup(args),
        Command::Corr(args) => handle_corr(args),
        Command::Export(args) => handle_export(args),
        Command::Show(args) => handle_show(args),
        Command::Daily(args) => handle_daily(args),
    }
}

fn handle_report(args: ReportArgs) -> Result<(), AppError> {
    let mut config = report_config_from_args(&args.common);
    config.group_by = args.group_by;
    config.export_csv = args.export;
    config.export_summary = args.export_summary;

    let run = pipeline::run_report(&config)?;

    match (&run.stats, &run.summary) {
        (Some(stats), Some(summary)) => {
            println!("{}", crate::report::format_run_summary(stats, &config));
            println!("{}", crate::report::format_summary_table(summary));
            println!(
                "{}",
                crate::report::format_group_table(&run.groups, config.group_by)
            );
            println!(
                "{}",
                crate::report::format_rollup(&run.revenue_rollup, NumericField::Revenue, config.top_n)
            );
        }
        _ => {
            println!("No data: the filter matched no records.");
        }
    }

    // Optional exports. The CSV is valid (header-only) even for an empty
    // match; the summary JSON needs data to describe.
    if let Some(path) = &config.export_csv {
        crate::io::export::write_dataset_csv(path, &run.filtered)?;
        println!("Wrote CSV: {}", path.display());
    }
    if let Some(path) = &config.export_summary {
        match (run.stats, run.summary) {
            (Some(stats), Some(summary)) => {
                let file = SummaryFile {
                    tool: "cafesim".to_string(),
                    days: config.days,
                    seed: config.seed,
                    stats,
                    summary,
                    group_by: config.group_by,
                    groups: run.groups,
                };
                crate::io::summary::write_summary_json(path, &file)?;
                println!("Wrote summary JSON: {}", path.display());
            }
            _ => println!("Skipped summary JSON: no data."),
        }
    }

    Ok(())
}

fn handle_rollup(args: RollupArgs) -> Result<(), AppError> {
    let config = report_config_from_args(&args.common);
    let run = pipeline::run_report(&config)?;

    if run.filtered.is_empty() {
        println!("No data: the filter matched no records.");
        return Ok(());
    }

    let rollup = crate::stats::daily_rollup(&run.filtered, args.field);
    println!(
        "{}",
        crate::report::format_rollup(&rollup, args.field, config.top_n)
    );
    Ok(())
}

fn handle_corr(args: GenArgs) -> Result<(), AppError> {
    let config = report_config_from_args(&args);
    let run = pipeline::run_report(&config)?;

    if run.filtered.is_empty() {
        println!("No data: the filter matched no records.");
        return Ok(());
    }

    let fields = NumericField::ALL;
    let matrix = crate::stats::correlation_matrix(&run.filtered, &fields);
    println!("{}", crate::report::format_corr_matrix(&matrix, &fields));
    Ok(())
}

fn handle_export(args: ExportArgs) -> Result<(), AppError> {
    let config = report_config_from_args(&args.common);
    let run = pipeline::run_report(&config)?;

    crate::io::export::write_dataset_csv(&args.out, &run.filtered)?;
    println!(
        "Wrote {} records to {}",
        run.filtered.len(),
        args.out.display()
    );
    Ok(())
}

fn handle_show(args: ShowArgs) -> Result<(), AppError> {
    let file = crate::io::summary::read_summary_json(&args.summary)?;

    println!(
        "=== cafesim - Saved Run Summary ===\nDays: {} | seed: {}\nRecords: n={} | dates=[{} .. {}] | items={}\n",
        file.days,
        file.seed,
        file.stats.n_records,
        file.stats.date_min,
        file.stats.date_max,
        file.stats.n_items
    );
    println!("{}", crate::report::format_summary_table(&file.summary));
    println!(
        "{}",
        crate::report::format_group_table(&file.groups, file.group_by)
    );
    Ok(())
}

fn handle_daily(args: DailyArgs) -> Result<(), AppError> {
    let records = crate::data::generate_daily(args.days, args.seed)?;
    let shown = match args.category {
        Some(category) => crate::stats::filter_daily_by_category(&records, category),
        None => records,
    };

    if shown.is_empty() {
        println!("No data: the filter matched no records.");
        return Ok(());
    }
    println!("{}", crate::report::format_daily_records(&shown));
    Ok(())
}

pub fn report_config_from_args(args: &GenArgs) -> ReportConfig {
    ReportConfig {
        days: args.days,
        seed: args.seed,
        filter_item: args.item,
        filter_from: args.from,
        filter_to: args.to,
        group_by: GroupKey::ItemType,
        top_n: args.top,
        export_csv: None,
        export_summary: None,
    }
}

/// Rewrite argv so `cafesim` defaults to `cafesim report`.
///
/// Rules:
/// - `cafesim`                       -> `cafesim report`
/// - `cafesim -n 200 ...`            -> `cafesim report -n 200 ...`
/// - `cafesim --help/--version/-h`   -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("report".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(
        arg1.as_str(),
        "report" | "rollup" | "corr" | "export" | "show" | "daily"
    );
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "report flags".
    if arg1.starts_with('-') {
        argv.insert(1, "report".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewritten(args: &[&str]) -> Vec<String> {
        rewrite_args(args.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn bare_invocation_defaults_to_report() {
        assert_eq!(rewritten(&["cafesim"]), vec!["cafesim", "report"]);
    }

    #[test]
    fn leading_flag_gets_report_inserted() {
        assert_eq!(
            rewritten(&["cafesim", "-n", "200"]),
            vec!["cafesim", "report", "-n", "200"]
        );
    }

    #[test]
    fn subcommands_and_help_pass_through() {
        assert_eq!(rewritten(&["cafesim", "corr"]), vec!["cafesim", "corr"]);
        assert_eq!(rewritten(&["cafesim", "show"]), vec!["cafesim", "show"]);
        assert_eq!(rewritten(&["cafesim", "--help"]), vec!["cafesim", "--help"]);
    }
}
