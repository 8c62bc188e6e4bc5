// src/plot_functions/plot_magnitude_spectrogram.rs

use std::error::Error;
use std::path::Path;

use crate::constants::{PLOT_HEIGHT, PLOT_WIDTH};
use crate::data_analysis::spectrogram::Spectrogram;
use crate::plot_framework::{draw_heatmap_plot, HeatmapData, HeatmapPlotConfig};
use crate::plot_functions::output_file_path;

/// Generates the dB heat map of the gaze magnitude spectrogram.
pub fn plot_magnitude_spectrogram(
    spectrogram: &Spectrogram,
    root_name: &str,
    output_dir: &Path,
) -> Result<(), Box<dyn Error>> {
    let output_file = output_file_path(output_dir, root_name, "Magnitude_Spectrogram", "png");

    let power_db = spectrogram.power_db();
    let values: Vec<Vec<f64>> = power_db.rows().into_iter().map(|row| row.to_vec()).collect();
    let (db_min, db_max) = power_db
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    let (db_min, db_max) = if db_max > db_min { (db_min, db_max) } else { (db_min - 1.0, db_min + 1.0) };

    let times = spectrogram.times.to_vec();
    let frequencies = spectrogram.frequencies.to_vec();
    let half_df = if frequencies.len() > 1 { (frequencies[1] - frequencies[0]) * 0.5 } else { 0.5 };
    // A lone segment spans nperseg / fs = 1 / df seconds.
    let half_step = if times.len() > 1 { (times[1] - times[0]) * 0.5 } else { 0.25 / half_df };

    let x_range = times.first().map_or(0.0, |t| t - half_step)..times.last().map_or(1.0, |t| t + half_step);
    let y_range = 0.0..frequencies.last().map_or(1.0, |f| f + half_df);

    let config = HeatmapPlotConfig {
        title: "Spectrogram of gaze magnitude".to_string(),
        x_range,
        y_range,
        heatmap_data: HeatmapData {
            x_bins: times,
            y_bins: frequencies,
            values,
        },
        x_label: "Time [s]".to_string(),
        y_label: "Frequency [Hz]".to_string(),
        color_label: "Power (dB)".to_string(),
        value_range: db_min..db_max,
    };

    draw_heatmap_plot(&output_file, root_name, (PLOT_WIDTH, PLOT_HEIGHT), &config)
}

// src/plot_functions/plot_magnitude_spectrogram.rs
