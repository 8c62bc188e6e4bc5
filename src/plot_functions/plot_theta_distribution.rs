// src/plot_functions/plot_theta_distribution.rs

use log::warn;
use std::error::Error;
use std::path::Path;

use crate::constants::{
    COLOR_HISTOGRAM_BAR, COLOR_KDE, HISTOGRAM_PLOT_HEIGHT, HISTOGRAM_PLOT_WIDTH, KDE_GRID_POINTS,
    LINE_WIDTH_KDE, THETA_HISTOGRAM_BINS,
};
use crate::data_analysis::distribution::{histogram, GaussianKde, Histogram};
use crate::data_input::log_data::SampleFrame;
use crate::plot_framework::{draw_histogram_plot, HistogramPlotConfig, PlotSeries};
use crate::plot_functions::output_file_path;

/// KDE curve over the histogram range, scaled from density to counts per bin.
fn kde_overlay(values: &[f64], hist: &Histogram) -> Option<Vec<(f64, f64)>> {
    let kde = GaussianKde::fit(values)?;
    let lo = hist.edges[0];
    let hi = hist.edges[hist.edges.len() - 1];
    let scale = kde.sample_count() as f64 * hist.bin_width();
    Some(
        kde.evaluate_grid(lo, hi, KDE_GRID_POINTS)
            .into_iter()
            .map(|(x, density)| (x, density * scale))
            .collect(),
    )
}

/// Generates the theta histogram with its kernel density overlay.
pub fn plot_theta_distribution(
    frame: &SampleFrame,
    root_name: &str,
    output_dir: &Path,
) -> Result<(), Box<dyn Error>> {
    let output_file = output_file_path(output_dir, root_name, "Theta_Distribution", "png");
    let values = frame.theta_deg.to_vec();

    let (edges, counts, overlay) = match histogram(&values, THETA_HISTOGRAM_BINS) {
        Some(hist) => {
            let overlay = match kde_overlay(&values, &hist) {
                Some(data) => Some(PlotSeries {
                    data,
                    label: "KDE".to_string(),
                    color: *COLOR_KDE,
                    stroke_width: LINE_WIDTH_KDE,
                }),
                None => {
                    warn!("theta_deg: density estimate undefined (fewer than 2 samples or zero variance); drawing histogram only.");
                    None
                }
            };
            (hist.edges, hist.counts, overlay)
        }
        None => (Vec::new(), Vec::new(), None),
    };

    let config = HistogramPlotConfig {
        title: "Distribution of Theta (deg)".to_string(),
        edges,
        counts,
        bar_color: *COLOR_HISTOGRAM_BAR,
        overlay,
        x_label: "theta_deg".to_string(),
        y_label: "Count".to_string(),
    };

    draw_histogram_plot(
        &output_file,
        root_name,
        (HISTOGRAM_PLOT_WIDTH, HISTOGRAM_PLOT_HEIGHT),
        &config,
    )
}


// src/plot_functions/plot_theta_distribution.rs
