// src/plot_functions/mod.rs

use std::path::{Path, PathBuf};

pub mod peak_detection;
pub mod plot_fft_spectrum;
pub mod plot_gaze_offsets;
pub mod plot_gaze_scatter;
pub mod plot_magnitude_spectrogram;
pub mod plot_radius;
pub mod plot_theta_distribution;

/// `<output_dir>/<root_name>_<plot_name>.<extension>`
pub fn output_file_path(output_dir: &Path, root_name: &str, plot_name: &str, extension: &str) -> PathBuf {
    output_dir.join(format!("{root_name}_{plot_name}.{extension}"))
}

/// Pairs each timestamp with its value, for time-axis line series.
pub(crate) fn time_series(times: &[f64], values: &[f64]) -> Vec<(f64, f64)> {
    times.iter().copied().zip(values.iter().copied()).collect()
}

/// Finite (min, max) of the timestamps. Record order is not assumed to be chronological.
pub(crate) fn time_bounds(times: &[f64]) -> (f64, f64) {
    let paired: Vec<(f64, f64)> = times.iter().map(|&t| (0.0, t)).collect();
    crate::plot_framework::value_bounds(&paired).unwrap_or((0.0, 0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_bounds_ignore_record_order() {
        assert_eq!(time_bounds(&[1000.0, 1001.0, 1002.0, 999.0]), (999.0, 1002.0));
        assert_eq!(time_bounds(&[5.0, f64::NAN]), (5.0, 5.0));
        assert_eq!(time_bounds(&[]), (0.0, 0.0));
    }

    #[test]
    fn test_output_file_path() {
        let path = output_file_path(Path::new("out"), "session", "Radius", "png");
        assert_eq!(path, Path::new("out").join("session_Radius.png"));
    }
}

// src/plot_functions/mod.rs
