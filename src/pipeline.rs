// src/pipeline.rs

use log::info;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use crate::axis_names::{axis_name, AXIS_COUNT};
use crate::constants::MIN_SPECTRUM_SAMPLES;
use crate::data_analysis::spectral_analysis::{compute_spectrum, resolve_sample_rate};
use crate::data_analysis::spectrogram::compute_spectrogram;
use crate::data_input::log_parser::parse_log_file;
use crate::error::AnalysisError;
use crate::plot_functions::plot_fft_spectrum::plot_fft_spectrum;
use crate::plot_functions::plot_gaze_offsets::plot_gaze_offsets;
use crate::plot_functions::plot_gaze_scatter::plot_gaze_scatter;
use crate::plot_functions::plot_magnitude_spectrogram::plot_magnitude_spectrogram;
use crate::plot_functions::plot_radius::plot_radius;
use crate::plot_functions::plot_theta_distribution::plot_theta_distribution;
use crate::report::print_report;

const MAGNITUDE_LABEL: &str = "‖xyz‖ (magnitude)";
const MAGNITUDE_FILE_TAG: &str = "magnitude";

/// Everything one run needs to know.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub sample_rate: Option<f64>,
    pub export_csv: bool,
}

/// Output file stem: the input file name without its extension.
pub fn root_name(input: &Path) -> String {
    input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "gaze".to_string())
}

/// Runs ingest, report, time-domain plots, spectra and the spectrogram, in that order.
/// Returns the sample rate used for every spectral step.
pub fn run(options: &RunOptions) -> Result<f64, Box<dyn Error>> {
    let frame = parse_log_file(&options.input)?;
    print_report(&frame);

    if frame.len() < MIN_SPECTRUM_SAMPLES {
        return Err(AnalysisError::InsufficientSamples {
            required: MIN_SPECTRUM_SAMPLES,
            actual: frame.len(),
        }
        .into());
    }

    // Inferred once, shared by every spectrum and the spectrogram.
    let sample_rate = resolve_sample_rate(options.sample_rate, &frame.t.to_vec())?;
    match options.sample_rate {
        Some(_) => info!("Using sample rate {sample_rate:.3} Hz (override)"),
        None => info!("Inferred sample rate {sample_rate:.3} Hz from timestamps"),
    }

    fs::create_dir_all(&options.output_dir)?;
    let root_name = root_name(&options.input);
    let output_dir = options.output_dir.as_path();

    plot_gaze_offsets(&frame, &root_name, output_dir)?;
    plot_gaze_scatter(&frame, &root_name, output_dir)?;
    plot_theta_distribution(&frame, &root_name, output_dir)?;
    plot_radius(&frame, &root_name, output_dir)?;

    for axis_index in 0..AXIS_COUNT {
        let axis_name = axis_name(axis_index);
        let spectrum = compute_spectrum(frame.offset(axis_index), sample_rate)?;
        plot_fft_spectrum(&spectrum, axis_name, axis_name, &root_name, output_dir, options.export_csv)?;
    }
    let magnitude_spectrum = compute_spectrum(&frame.xyz_magnitude, sample_rate)?;
    plot_fft_spectrum(
        &magnitude_spectrum,
        MAGNITUDE_LABEL,
        MAGNITUDE_FILE_TAG,
        &root_name,
        output_dir,
        options.export_csv,
    )?;

    let spectrogram = compute_spectrogram(&frame.xyz_magnitude, sample_rate)?;
    plot_magnitude_spectrogram(&spectrogram, &root_name, output_dir)?;

    Ok(sample_rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_name_strips_extension() {
        assert_eq!(root_name(Path::new("logs/session_01.jsonl")), "session_01");
        assert_eq!(root_name(Path::new("plain")), "plain");
    }
}

// src/pipeline.rs
