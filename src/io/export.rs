//! Export the dataset to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream
//! scripts: one header row, one row per record in dataset order, dates as
//! `YYYY-MM-DD`. `parse_dataset_csv` reads the same format back, so a
//! round-trip preserves every field to the serialized precision.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::NaiveDate;

use crate::domain::{ItemType, SalesRecord};
use crate::error::AppError;

const CSV_HEADER: &str = "date,item_type,quantity_sold,temperature,humidity,price,revenue";

/// Render the dataset as a CSV string.
pub fn dataset_to_csv(records: &[SalesRecord]) -> String {
    let mut out = String::new();
    out.push_str(CSV_HEADER);
    out.push('\n');

    for r in records {
        out.push_str(&format!(
            "{},{},{},{:.6},{:.6},{:.2},{:.2}\n",
            r.date,
            r.item_type.display_name(),
            r.quantity_sold,
            r.temperature,
            r.humidity,
            r.price,
            r.revenue,
        ));
    }

    out
}

/// Write the dataset to a CSV file.
pub fn write_dataset_csv(path: &Path, records: &[SalesRecord]) -> Result<(), AppError> {
    let mut file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display())))?;

    file.write_all(dataset_to_csv(records).as_bytes())
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV: {e}")))?;

    Ok(())
}

/// Parse a CSV string in the export format back into records.
pub fn parse_dataset_csv(csv: &str) -> Result<Vec<SalesRecord>, AppError> {
    let mut lines = csv.lines();
    let header = lines
        .next()
        .ok_or_else(|| AppError::new(2, "Empty CSV input."))?;
    if header.trim() != CSV_HEADER {
        return Err(AppError::new(2, format!("Unexpected CSV header: '{header}'")));
    }

    let mut records = Vec::new();
    for (lineno, line) in lines.enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        records.push(parse_row(line).map_err(|e| {
            AppError::new(2, format!("CSV row {}: {e}", lineno + 2))
        })?);
    }

    Ok(records)
}

fn parse_row(line: &str) -> Result<SalesRecord, AppError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 7 {
        return Err(AppError::new(2, format!("expected 7 fields, got {}", fields.len())));
    }

    let date = fields[0]
        .parse::<NaiveDate>()
        .map_err(|e| AppError::new(2, format!("bad date '{}': {e}", fields[0])))?;
    let item_type = ItemType::from_label(fields[1])
        .ok_or_else(|| AppError::new(2, format!("unknown item type '{}'", fields[1])))?;
    let quantity_sold = parse_num::<u64>(fields[2], "quantity_sold")?;

    Ok(SalesRecord {
        date,
        item_type,
        quantity_sold,
        temperature: parse_num::<f64>(fields[3], "temperature")?,
        humidity: parse_num::<f64>(fields[4], "humidity")?,
        price: parse_num::<f64>(fields[5], "price")?,
        revenue: parse_num::<f64>(fields[6], "revenue")?,
    })
}

fn parse_num<T: std::str::FromStr>(raw: &str, name: &str) -> Result<T, AppError>
where
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| AppError::new(2, format!("bad {name} '{raw}': {e}")))
}
