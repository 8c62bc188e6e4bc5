// src/data_analysis/distribution.rs

use ndarray::Array1;
use std::f64::consts::PI;

use crate::data_analysis::summary_stats::sample_std;

/// Equal-width histogram over the closed data range.
#[derive(Debug, Clone)]
pub struct Histogram {
    /// `bins + 1` ascending edges.
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    pub fn bin_width(&self) -> f64 {
        if self.edges.len() < 2 {
            return 0.0;
        }
        self.edges[1] - self.edges[0]
    }

    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

/// Bins finite values into `bins` equal-width intervals spanning [min, max].
/// The last interval is closed on the right. A zero-width range is widened
/// by 0.5 on both sides. Returns `None` when there are no finite values.
pub fn histogram(values: &[f64], bins: usize) -> Option<Histogram> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() || bins == 0 {
        return None;
    }
    let mut min = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let mut max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max - min <= 0.0 {
        min -= 0.5;
        max += 0.5;
    }
    let width = (max - min) / bins as f64;
    let edges: Vec<f64> = (0..=bins).map(|i| min + i as f64 * width).collect();

    let mut counts = vec![0usize; bins];
    for v in finite {
        let idx = (((v - min) / width).floor() as usize).min(bins - 1);
        counts[idx] += 1;
    }
    Some(Histogram { edges, counts })
}

/// Gaussian kernel density estimate with Scott's bandwidth `σ · n^(-1/5)`.
#[derive(Debug, Clone)]
pub struct GaussianKde {
    samples: Vec<f64>,
    bandwidth: f64,
}

impl GaussianKde {
    /// Fits the estimator; `None` below two finite samples or for zero variance.
    pub fn fit(values: &[f64]) -> Option<Self> {
        let samples: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if samples.len() < 2 {
            return None;
        }
        let std = sample_std(&Array1::from(samples.clone()));
        if !std.is_finite() || std <= 0.0 {
            return None;
        }
        let bandwidth = std * (samples.len() as f64).powf(-0.2);
        Some(Self { samples, bandwidth })
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Probability density at `x`.
    pub fn density(&self, x: f64) -> f64 {
        let norm = 1.0 / (self.samples.len() as f64 * self.bandwidth * (2.0 * PI).sqrt());
        let sum: f64 = self
            .samples
            .iter()
            .map(|s| {
                let u = (x - s) / self.bandwidth;
                (-0.5 * u * u).exp()
            })
            .sum();
        norm * sum
    }

    /// Evaluates the density on `points` evenly spaced values over [lo, hi].
    pub fn evaluate_grid(&self, lo: f64, hi: f64, points: usize) -> Vec<(f64, f64)> {
        if points == 0 {
            return Vec::new();
        }
        if points == 1 {
            return vec![(lo, self.density(lo))];
        }
        let step = (hi - lo) / (points - 1) as f64;
        (0..points)
            .map(|i| {
                let x = lo + i as f64 * step;
                (x, self.density(x))
            })
            .collect()
    }
}


// src/data_analysis/distribution.rs
