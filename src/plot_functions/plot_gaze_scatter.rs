// src/plot_functions/plot_gaze_scatter.rs

use std::error::Error;
use std::path::Path;

use crate::constants::{SCATTER_PLOT_SIZE, SCATTER_POINT_SIZE};
use crate::data_input::log_data::SampleFrame;
use crate::plot_framework::{calculate_range, draw_scatter_plot, value_bounds, ScatterPlotConfig};
use crate::plot_functions::output_file_path;

/// Generates the x vs y scatter plot, colored by radius, with the origin crosshair.
pub fn plot_gaze_scatter(
    frame: &SampleFrame,
    root_name: &str,
    output_dir: &Path,
) -> Result<(), Box<dyn Error>> {
    let output_file = output_file_path(output_dir, root_name, "Gaze_Scatter", "png");

    let points: Vec<(f64, f64, f64)> = frame
        .x
        .iter()
        .zip(frame.y.iter())
        .zip(frame.radius.iter())
        .map(|((&x, &y), &r)| (x, y, r))
        .filter(|(x, y, _)| x.is_finite() && y.is_finite())
        .collect();

    let xs: Vec<(f64, f64)> = points.iter().map(|p| (0.0, p.0)).collect();
    let ys: Vec<(f64, f64)> = points.iter().map(|p| (0.0, p.1)).collect();
    let rs: Vec<(f64, f64)> = points.iter().map(|p| (0.0, p.2)).collect();

    // Keep the origin inside the view so the crosshair is always visible.
    let (x_lo, x_hi) = value_bounds(&xs).map_or((0.0, 0.0), |(lo, hi)| calculate_range(lo.min(0.0), hi.max(0.0)));
    let (y_lo, y_hi) = value_bounds(&ys).map_or((0.0, 0.0), |(lo, hi)| calculate_range(lo.min(0.0), hi.max(0.0)));
    let (r_lo, r_hi) = value_bounds(&rs).unwrap_or((0.0, 1.0));
    let r_hi = if r_hi > r_lo { r_hi } else { r_lo + 1.0 };

    let config = ScatterPlotConfig {
        title: "Gaze Scatter (x vs y)".to_string(),
        x_range: x_lo..x_hi,
        y_range: y_lo..y_hi,
        points,
        color_range: r_lo..r_hi,
        x_label: "x".to_string(),
        y_label: "y".to_string(),
        color_label: "radius".to_string(),
        point_size: SCATTER_POINT_SIZE,
        origin_crosshair: true,
    };

    draw_scatter_plot(&output_file, root_name, (SCATTER_PLOT_SIZE, SCATTER_PLOT_SIZE), &config)
}

// src/plot_functions/plot_gaze_scatter.rs
