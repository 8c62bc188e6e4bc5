// src/data_analysis/summary_stats.rs

use ndarray::Array1;
use ndarray_stats::interpolate::Linear;
use ndarray_stats::{Quantile1dExt, QuantileExt};
use noisy_float::types::{n64, N64};

/// Per-column statistics printed by the `describe` section of the report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnSummary {
    pub count: usize,
    pub mean: f64,
    pub std: f64, // Sample standard deviation (ddof = 1)
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

impl ColumnSummary {
    /// Summary of an empty column: zero count, NaN everywhere else.
    pub fn empty() -> Self {
        Self {
            count: 0,
            mean: f64::NAN,
            std: f64::NAN,
            min: f64::NAN,
            q25: f64::NAN,
            median: f64::NAN,
            q75: f64::NAN,
            max: f64::NAN,
        }
    }
}

/// Linear-interpolated quantiles (position `(n - 1) * q`) of the non-NaN
/// values. NaN for each requested `q` when nothing is left.
pub fn quantiles(values: &[f64], qs: &[f64]) -> Vec<f64> {
    let mut checked: Array1<N64> = values.iter().filter_map(|&v| N64::try_new(v)).collect();
    qs.iter()
        .map(|&q| {
            checked
                .quantile_mut(n64(q.clamp(0.0, 1.0)), &Linear)
                .map(|v| v.raw())
                .unwrap_or(f64::NAN)
        })
        .collect()
}

/// Median of unsorted values; an even count averages the two middle values.
pub fn median(values: &[f64]) -> f64 {
    quantiles(values, &[0.5])[0]
}

/// Sample standard deviation (ddof = 1). NaN below two samples.
pub fn sample_std(values: &Array1<f64>) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    values.std(1.0)
}

/// Computes count, mean, std, min, quartiles and max of one column.
pub fn describe_column(values: &Array1<f64>) -> ColumnSummary {
    if values.is_empty() {
        return ColumnSummary::empty();
    }
    let quartiles = quantiles(&values.to_vec(), &[0.25, 0.5, 0.75]);

    ColumnSummary {
        count: values.len(),
        mean: values.mean().unwrap_or(f64::NAN),
        std: sample_std(values),
        min: *values.min_skipnan(),
        q25: quartiles[0],
        median: quartiles[1],
        q75: quartiles[2],
        max: *values.max_skipnan(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_quartiles_interpolate_linearly() {
        let summary = describe_column(&array![4.0, 1.0, 3.0, 2.0]);
        assert_eq!(summary.count, 4);
        assert_eq!(summary.mean, 2.5);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 4.0);
        assert_eq!(summary.q25, 1.75);
        assert_eq!(summary.median, 2.5);
        assert_eq!(summary.q75, 3.25);
        assert!((summary.std - 1.2909944487358056).abs() < 1e-12);
    }

    #[test]
    fn test_single_value_has_nan_std() {
        let summary = describe_column(&array![7.0]);
        assert_eq!(summary.count, 1);
        assert_eq!(summary.q25, 7.0);
        assert_eq!(summary.q75, 7.0);
        assert!(summary.std.is_nan());
    }

    #[test]
    fn test_empty_column() {
        let summary = describe_column(&Array1::zeros(0));
        assert_eq!(summary.count, 0);
        assert!(summary.mean.is_nan());
        assert!(summary.max.is_nan());
    }

    #[test]
    fn test_median_even_and_odd() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
        assert!(median(&[]).is_nan());
    }

    #[test]
    fn test_quantiles_skip_nan() {
        let q = quantiles(&[f64::NAN, 10.0, 0.0, 20.0], &[0.0, 0.5, 1.0]);
        assert_eq!(q, vec![0.0, 10.0, 20.0]);
        assert!(quantiles(&[f64::NAN], &[0.5])[0].is_nan());
    }
}

// src/data_analysis/summary_stats.rs
