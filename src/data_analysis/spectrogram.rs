// src/data_analysis/spectrogram.rs

use log::{debug, warn};
use ndarray::{s, Array1, Array2};
use std::f64::consts::PI;

use crate::constants::{
    MIN_SPECTRUM_SAMPLES, SPECTROGRAM_MIN_POWER_DB, SPECTROGRAM_NPERSEG,
    SPECTROGRAM_OVERLAP_DIVISOR, SPECTROGRAM_TUKEY_ALPHA,
};
use crate::data_analysis::fft_utils;
use crate::error::AnalysisError;

/// Short-time power spectral density of one signal.
#[derive(Debug, Clone)]
pub struct Spectrogram {
    /// Segment centre times in seconds from the first sample.
    pub times: Array1<f64>,
    /// Bin frequencies in Hz, 0..=fs/2.
    pub frequencies: Array1<f64>,
    /// Linear power density, shape (time bins x frequency bins).
    pub power: Array2<f64>,
    pub segment_len: usize,
    pub overlap: usize,
}

impl Spectrogram {
    /// `10·log10(power)`, floored for zero power.
    pub fn power_db(&self) -> Array2<f64> {
        self.power.mapv(power_to_db)
    }
}

/// Converts linear power to decibels. Non-positive values map to the floor.
pub fn power_to_db(power: f64) -> f64 {
    if power <= 0.0 || !power.is_finite() {
        SPECTROGRAM_MIN_POWER_DB
    } else {
        (10.0 * power.log10()).max(SPECTROGRAM_MIN_POWER_DB)
    }
}

/// Tukey (tapered cosine) window. `periodic` builds the FFT-friendly variant
/// by computing `len + 1` symmetric points and dropping the last.
pub fn tukey_window(len: usize, alpha: f64, periodic: bool) -> Array1<f64> {
    if len == 0 {
        return Array1::zeros(0);
    }
    if len == 1 {
        return Array1::ones(1);
    }
    if periodic {
        let extended = tukey_window(len + 1, alpha, false);
        return extended.slice(s![..len]).to_owned();
    }
    if alpha <= 0.0 {
        return Array1::ones(len);
    }
    let m = (len - 1) as f64;
    if alpha >= 1.0 {
        return Array1::from_shape_fn(len, |i| 0.5 * (1.0 - (2.0 * PI * i as f64 / m).cos()));
    }

    let width = (alpha * m / 2.0).floor() as usize;
    Array1::from_shape_fn(len, |i| {
        let n = i as f64;
        if i <= width {
            0.5 * (1.0 + (PI * (-1.0 + 2.0 * n / alpha / m)).cos())
        } else if i >= len - width - 1 {
            0.5 * (1.0 + (PI * (-2.0 / alpha + 1.0 + 2.0 * n / alpha / m)).cos())
        } else {
            1.0
        }
    })
}

/// Computes the STFT power spectrogram of `signal` sampled at `sample_rate`.
///
/// Segments of `SPECTROGRAM_NPERSEG` samples (shortened to the signal length
/// when needed) overlap by `nperseg / 8`. Each segment has its mean removed,
/// is tapered with a periodic Tukey(0.25) window, and is scaled to a one-sided
/// power spectral density.
pub fn compute_spectrogram(
    signal: &Array1<f64>,
    sample_rate: f64,
) -> Result<Spectrogram, AnalysisError> {
    let total_len = signal.len();
    if total_len < MIN_SPECTRUM_SAMPLES {
        return Err(AnalysisError::InsufficientSamples {
            required: MIN_SPECTRUM_SAMPLES,
            actual: total_len,
        });
    }
    if !sample_rate.is_finite() || sample_rate <= 0.0 {
        return Err(AnalysisError::InvalidSampleRate(sample_rate));
    }

    let nperseg = if total_len < SPECTROGRAM_NPERSEG {
        warn!(
            "Spectrogram segment length {} exceeds signal length {}; using {}",
            SPECTROGRAM_NPERSEG, total_len, total_len
        );
        total_len
    } else {
        SPECTROGRAM_NPERSEG
    };
    let noverlap = nperseg / SPECTROGRAM_OVERLAP_DIVISOR;
    let step = nperseg - noverlap;
    let num_segments = (total_len - noverlap) / step;

    let window = tukey_window(nperseg, SPECTROGRAM_TUKEY_ALPHA, true);
    let window_power: f64 = window.iter().map(|w| w * w).sum();
    let density_scale = 1.0 / (sample_rate * window_power);

    let num_freqs = fft_utils::rfft_output_len(nperseg);
    let frequencies = fft_utils::rfft_frequencies(nperseg, sample_rate);
    let mut power = Array2::<f64>::zeros((num_segments, num_freqs));
    let mut times = Array1::<f64>::zeros(num_segments);

    for seg_idx in 0..num_segments {
        let start = seg_idx * step;
        let segment = signal.slice(s![start..start + nperseg]);
        let mean = segment.mean().unwrap_or(0.0);
        let tapered = Array1::from_shape_fn(nperseg, |i| (segment[i] - mean) * window[i]);

        let spectrum = fft_utils::fft_forward(&tapered)?;
        if spectrum.len() != num_freqs {
            return Err(AnalysisError::Fft(format!(
                "segment {} produced {} bins, expected {}",
                seg_idx,
                spectrum.len(),
                num_freqs
            )));
        }

        for k in 0..num_freqs {
            let mut psd = spectrum[k].norm_sqr() * density_scale;
            // One-sided: fold negative frequencies except DC and (even length) Nyquist.
            let is_nyquist = nperseg % 2 == 0 && k == num_freqs - 1;
            if k > 0 && !is_nyquist {
                psd *= 2.0;
            }
            power[[seg_idx, k]] = psd;
        }
        times[seg_idx] = (start as f64 + nperseg as f64 / 2.0) / sample_rate;
    }

    debug!(
        "Spectrogram: {} segments x {} bins (nperseg={}, noverlap={})",
        num_segments, num_freqs, nperseg, noverlap
    );

    Ok(Spectrogram {
        times,
        frequencies,
        power,
        segment_len: nperseg,
        overlap: noverlap,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tukey_window_shape() {
        let w = tukey_window(256, 0.25, true);
        assert_eq!(w.len(), 256);
        assert!(w[0].abs() < 1e-12);
        assert!((w[128] - 1.0).abs() < 1e-12);
        // Periodic window is symmetric about its centre sample.
        for i in 1..128 {
            assert!((w[i] - w[256 - i]).abs() < 1e-12);
        }
        assert!(w.iter().all(|v| (0.0..=1.0).contains(v)));
    }

    #[test]
    fn test_tukey_window_limits() {
        assert_eq!(tukey_window(4, 0.0, false).to_vec(), vec![1.0; 4]);
        let hann = tukey_window(5, 1.0, false);
        assert!(hann[0].abs() < 1e-12 && (hann[2] - 1.0).abs() < 1e-12);
        assert_eq!(tukey_window(1, 0.25, true).to_vec(), vec![1.0]);
    }

    #[test]
    fn test_segment_layout() {
        let signal = Array1::from_shape_fn(1024, |i| (i as f64 * 0.3).sin());
        let sg = compute_spectrogram(&signal, 256.0).unwrap();
        assert_eq!(sg.segment_len, 256);
        assert_eq!(sg.overlap, 32);
        assert_eq!(sg.times.len(), (1024 - 32) / (256 - 32));
        assert_eq!(sg.power.dim(), (4, 129));
        assert_eq!(sg.times[0], 0.5);
        assert_eq!(sg.times[1], (224.0 + 128.0) / 256.0);
        assert_eq!(*sg.frequencies.last().unwrap(), 128.0);
    }

    #[test]
    fn test_stationary_tone_concentrates_power() {
        let fs = 256.0;
        let f0 = 32.0;
        let signal = Array1::from_shape_fn(2048, |i| (2.0 * PI * f0 * i as f64 / fs).sin());
        let sg = compute_spectrogram(&signal, fs).unwrap();
        for row in sg.power.rows() {
            let peak = row
                .iter()
                .enumerate()
                .max_by(|a, b| a.1.total_cmp(b.1))
                .map(|(i, _)| i)
                .unwrap();
            assert_eq!(peak, 32);
        }
    }

    #[test]
    fn test_short_signal_shrinks_segment() {
        let signal = Array1::from_shape_fn(100, |i| i as f64);
        let sg = compute_spectrogram(&signal, 10.0).unwrap();
        assert_eq!(sg.segment_len, 100);
        assert_eq!(sg.overlap, 12);
        assert_eq!(sg.times.len(), 1);
        assert_eq!(sg.frequencies.len(), 51);
    }

    #[test]
    fn test_constant_signal_hits_db_floor() {
        let signal = Array1::from_elem(300, 2.0);
        let sg = compute_spectrogram(&signal, 30.0).unwrap();
        assert!(sg.power_db().iter().all(|db| *db <= -100.0));
    }

    #[test]
    fn test_rejects_degenerate_input() {
        assert!(matches!(
            compute_spectrogram(&Array1::from_elem(1, 1.0), 10.0),
            Err(AnalysisError::InsufficientSamples { .. })
        ));
        assert!(matches!(
            compute_spectrogram(&Array1::from_elem(10, 1.0), 0.0),
            Err(AnalysisError::InvalidSampleRate(_))
        ));
    }
}

// src/data_analysis/spectrogram.rs
