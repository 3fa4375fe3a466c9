//! Per-field descriptive statistics (the `describe()`-style summary table).

use serde::{Deserialize, Serialize};

use crate::domain::{NumericField, SalesRecord};

/// Summary of one numeric field across the dataset.
///
/// `std` is the sample standard deviation (n-1 denominator); quartiles use
/// linear interpolation between order statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSummary {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub max: f64,
}

/// Summarize every numeric field, in `NumericField::ALL` order.
///
/// Returns `None` for an empty dataset: "no data" is an explicit outcome
/// here, never a fault.
pub fn summary_stats(records: &[SalesRecord]) -> Option<Vec<(NumericField, FieldSummary)>> {
    if records.is_empty() {
        return None;
    }

    let mut out = Vec::with_capacity(NumericField::ALL.len());
    for field in NumericField::ALL {
        let values: Vec<f64> = records.iter().map(|r| field.value(r)).collect();
        out.push((field, describe(&values)));
    }
    Some(out)
}

/// Describe one non-empty value series.
fn describe(values: &[f64]) -> FieldSummary {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    FieldSummary {
        count: values.len(),
        mean: mean(values),
        std: sample_std(values),
        min: sorted[0],
        p25: quantile(&sorted, 0.25),
        p50: quantile(&sorted, 0.50),
        p75: quantile(&sorted, 0.75),
        max: sorted[sorted.len() - 1],
    }
}

pub(crate) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n-1 denominator); 0.0 when fewer than 2 values.
pub(crate) fn sample_std(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }
    let m = mean(values);
    let ss: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    (ss / (n - 1) as f64).sqrt()
}

/// Quantile of a sorted series with linear interpolation.
///
/// For `q ∈ [0, 1]` the position is `q * (n - 1)`; non-integer positions
/// interpolate between the two neighboring order statistics.
pub(crate) fn quantile(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let pos = q.clamp(0.0, 1.0) * (n - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + frac * (sorted[hi] - sorted[lo])
}
