// src/data_analysis/spectral_analysis.rs

use log::debug;
use ndarray::Array1;

use crate::constants::MIN_SPECTRUM_SAMPLES;
use crate::data_analysis::fft_utils;
use crate::data_analysis::summary_stats::median;
use crate::error::AnalysisError;

/// One-sided magnitude spectrum of a real signal.
#[derive(Debug, Clone)]
pub struct Spectrum {
    /// Bin frequencies in Hz, `k * sample_rate / N` for `k = 0..=N/2`.
    pub frequencies: Array1<f64>,
    /// `|X[k]|` of the DC-removed signal, unnormalized.
    pub magnitudes: Array1<f64>,
    pub sample_rate: f64,
    /// Length N of the analysed signal.
    pub signal_len: usize,
}

impl Spectrum {
    pub fn nyquist(&self) -> f64 {
        self.sample_rate / 2.0
    }

    /// (frequency, magnitude) pairs, the shape the plot framework consumes.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.frequencies
            .iter()
            .zip(self.magnitudes.iter())
            .map(|(&f, &m)| (f, m))
            .collect()
    }

    /// Index of the largest magnitude, ignoring NaN.
    pub fn dominant_bin(&self) -> Option<usize> {
        self.magnitudes
            .iter()
            .enumerate()
            .filter(|(_, m)| !m.is_nan())
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| i)
    }
}

/// Estimates the sampling rate as the reciprocal of the median interval
/// between consecutive raw epoch timestamps. Uniform sampling is assumed.
pub fn infer_sample_rate(times: &[f64]) -> Result<f64, AnalysisError> {
    if times.len() < 2 {
        return Err(AnalysisError::InsufficientSamples {
            required: 2,
            actual: times.len(),
        });
    }
    let deltas: Vec<f64> = times.windows(2).map(|w| w[1] - w[0]).collect();
    let dt = median(&deltas);
    if !dt.is_finite() || dt <= 0.0 {
        return Err(AnalysisError::InvalidSampleInterval(dt));
    }
    Ok(1.0 / dt)
}

/// Returns the explicit rate when one is given, otherwise infers it from `times`.
pub fn resolve_sample_rate(
    sample_rate: Option<f64>,
    times: &[f64],
) -> Result<f64, AnalysisError> {
    let rate = match sample_rate {
        Some(sr) => sr,
        None => infer_sample_rate(times)?,
    };
    validate_sample_rate(rate)?;
    Ok(rate)
}

fn validate_sample_rate(sample_rate: f64) -> Result<(), AnalysisError> {
    if !sample_rate.is_finite() || sample_rate <= 0.0 {
        return Err(AnalysisError::InvalidSampleRate(sample_rate));
    }
    Ok(())
}

/// Subtracts the arithmetic mean from every sample.
pub fn remove_dc(signal: &Array1<f64>) -> Array1<f64> {
    match signal.mean() {
        Some(mean) => signal.mapv(|v| v - mean),
        None => Array1::zeros(0),
    }
}

/// Computes the one-sided magnitude spectrum of the DC-removed signal.
///
/// No windowing or zero padding is applied, so bins sit exactly at
/// `k * sample_rate / N`. Signals shorter than two samples are refused.
pub fn compute_spectrum(signal: &Array1<f64>, sample_rate: f64) -> Result<Spectrum, AnalysisError> {
    let n = signal.len();
    if n < MIN_SPECTRUM_SAMPLES {
        return Err(AnalysisError::InsufficientSamples {
            required: MIN_SPECTRUM_SAMPLES,
            actual: n,
        });
    }
    validate_sample_rate(sample_rate)?;

    let centered = remove_dc(signal);
    let coefficients = fft_utils::fft_forward(&centered)?;
    let frequencies = fft_utils::rfft_frequencies(n, sample_rate);
    if coefficients.len() != frequencies.len() {
        return Err(AnalysisError::Fft(format!(
            "expected {} bins, got {}",
            frequencies.len(),
            coefficients.len()
        )));
    }
    let magnitudes = coefficients.mapv(|c| c.norm());
    debug!(
        "Spectrum: N={}, fs={:.3} Hz, {} bins, resolution {:.4} Hz",
        n,
        sample_rate,
        frequencies.len(),
        sample_rate / n as f64
    );

    Ok(Spectrum {
        frequencies,
        magnitudes,
        sample_rate,
        signal_len: n,
    })
}


// src/data_analysis/spectral_analysis.rs
