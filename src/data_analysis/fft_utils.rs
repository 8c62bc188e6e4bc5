// src/data_analysis/fft_utils.rs

use ndarray::Array1;
use realfft::num_complex::Complex64;
use realfft::RealFftPlanner;

use crate::error::AnalysisError;

/// Number of non-redundant bins produced by a real FFT of length `n`.
pub fn rfft_output_len(n: usize) -> usize {
    n / 2 + 1
}

/// Computes the one-sided Fast Fourier Transform (FFT) of a real-valued signal.
/// Returns `⌊N/2⌋+1` complex coefficients, unnormalized. Empty input gives an empty spectrum.
pub fn fft_forward(data: &Array1<f64>) -> Result<Array1<Complex64>, AnalysisError> {
    if data.is_empty() {
        return Ok(Array1::zeros(0));
    }
    let n = data.len();
    let mut input = data.to_vec();
    let planner = RealFftPlanner::<f64>::new().plan_fft_forward(n);
    let mut output = planner.make_output_vec();
    planner
        .process(&mut input, &mut output)
        .map_err(|e| AnalysisError::Fft(e.to_string()))?;
    Ok(Array1::from(output))
}

/// Frequencies of the real FFT output bins: `k * sample_rate / n` for `k = 0..=n/2`.
pub fn rfft_frequencies(n: usize, sample_rate: f64) -> Array1<f64> {
    if n == 0 {
        return Array1::zeros(0);
    }
    let num_freqs = rfft_output_len(n);
    Array1::from_shape_fn(num_freqs, |k| k as f64 * sample_rate / n as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_vector_even_and_odd() {
        let even = rfft_frequencies(8, 100.0);
        assert_eq!(even.len(), 5);
        assert_eq!(even[4], 50.0);

        let odd = rfft_frequencies(7, 70.0);
        assert_eq!(odd.len(), 4);
        assert!((odd[3] - 30.0).abs() < 1e-12);
        assert!(odd[3] <= 35.0);
    }

    #[test]
    fn test_fft_of_impulse_is_flat() {
        let mut impulse = Array1::<f64>::zeros(16);
        impulse[0] = 1.0;
        let spectrum = fft_forward(&impulse).unwrap();
        assert_eq!(spectrum.len(), 9);
        for c in spectrum.iter() {
            assert!((c.norm() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(fft_forward(&Array1::zeros(0)).unwrap().is_empty());
        assert!(rfft_frequencies(0, 10.0).is_empty());
    }
}

// src/data_analysis/fft_utils.rs
