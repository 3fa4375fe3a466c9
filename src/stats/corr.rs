//! Pairwise Pearson correlation across numeric fields.

use nalgebra::DMatrix;

use crate::domain::{NumericField, SalesRecord};
use crate::stats::describe::mean;

/// Pearson correlation matrix for the given fields, in the given order.
///
/// The diagonal is exactly 1.0 and the matrix is symmetric by construction.
/// A field with zero variance has undefined correlation and its off-diagonal
/// entries are NaN. An empty dataset yields a 0x0 matrix.
pub fn correlation_matrix(records: &[SalesRecord], fields: &[NumericField]) -> DMatrix<f64> {
    if records.is_empty() {
        return DMatrix::zeros(0, 0);
    }

    let series: Vec<Vec<f64>> = fields
        .iter()
        .map(|f| records.iter().map(|r| f.value(r)).collect())
        .collect();

    let k = fields.len();
    let mut out = DMatrix::zeros(k, k);

    for i in 0..k {
        out[(i, i)] = 1.0;
        for j in (i + 1)..k {
            let r = pearson(&series[i], &series[j]);
            out[(i, j)] = r;
            out[(j, i)] = r;
        }
    }

    out
}

/// Pearson coefficient of two equal-length series; NaN if either is constant.
fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let mx = mean(x);
    let my = mean(y);

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (a, b) in x.iter().zip(y) {
        let dx = a - mx;
        let dy = b - my;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denom = (var_x * var_y).sqrt();
    if denom == 0.0 {
        return f64::NAN;
    }
    (cov / denom).clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::generate_sales;

    #[test]
    fn diagonal_is_one_and_matrix_is_symmetric() {
        let records = generate_sales(60, 42).unwrap();
        let fields = NumericField::ALL;
        let m = correlation_matrix(&records, &fields);

        assert_eq!(m.nrows(), fields.len());
        for i in 0..fields.len() {
            assert_eq!(m[(i, i)], 1.0);
            for j in 0..fields.len() {
                let a = m[(i, j)];
                let b = m[(j, i)];
                assert!(a.is_nan() == b.is_nan());
                if !a.is_nan() {
                    assert_eq!(a, b);
                    assert!((-1.0..=1.0).contains(&a));
                }
            }
        }
    }

    #[test]
    fn revenue_tracks_quantity() {
        // Revenue is quantity * price with a narrow price range, so the two
        // must be strongly positively correlated.
        let records = generate_sales(100, 42).unwrap();
        let m = correlation_matrix(
            &records,
            &[NumericField::QuantitySold, NumericField::Revenue],
        );
        assert!(m[(0, 1)] > 0.5, "corr = {}", m[(0, 1)]);
    }

    #[test]
    fn constant_field_is_nan() {
        let mut records = generate_sales(10, 42).unwrap();
        // Flatten humidity to a constant.
        for r in &mut records {
            r.humidity = 50.0;
        }
        let m = correlation_matrix(&records, &[NumericField::Humidity, NumericField::Revenue]);
        assert!(m[(0, 1)].is_nan());
        assert_eq!(m[(0, 0)], 1.0);
    }

    #[test]
    fn empty_dataset_yields_empty_matrix() {
        let m = correlation_matrix(&[], &NumericField::ALL);
        assert_eq!(m.nrows(), 0);
        assert_eq!(m.ncols(), 0);
    }

    #[test]
    fn perfectly_linear_series_hits_the_bounds() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [2.0, 4.0, 6.0, 8.0];
        let neg = [8.0, 6.0, 4.0, 2.0];
        assert!((pearson(&x, &y) - 1.0).abs() < 1e-12);
        assert!((pearson(&x, &neg) + 1.0).abs() < 1e-12);
    }
}
