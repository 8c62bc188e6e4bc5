// src/plot_functions/plot_gaze_offsets.rs

use plotters::style::RGBColor;
use std::error::Error;
use std::ops::Range;
use std::path::Path;

use crate::axis_names::{AXIS_COUNT, AXIS_NAMES};
use crate::constants::{
    COLOR_OFFSET_X, COLOR_OFFSET_Y, COLOR_OFFSET_Z, LINE_WIDTH_PLOT, PLOT_HEIGHT, PLOT_WIDTH,
};
use crate::data_input::log_data::SampleFrame;
use crate::plot_framework::{
    calculate_range, draw_stacked_plot, value_bounds, PlotConfig, PlotSeries, XAxisFormat,
};
use crate::plot_functions::{output_file_path, time_bounds, time_series};

const AXIS_COLORS: [&RGBColor; AXIS_COUNT] = [COLOR_OFFSET_X, COLOR_OFFSET_Y, COLOR_OFFSET_Z];

/// Row config for one offset axis; `None` when the column has no finite values.
fn offset_plot_config(
    frame: &SampleFrame,
    times: &[f64],
    time_range: Range<f64>,
    axis_index: usize,
) -> Option<PlotConfig> {
    let data = time_series(times, frame.offset(axis_index).as_slice()?);
    let (val_min, val_max) = value_bounds(&data)?;
    let (y_min, y_max) = calculate_range(val_min, val_max);
    let axis_name = AXIS_NAMES[axis_index];

    Some(PlotConfig {
        title: format!("Offset {axis_name}"),
        x_range: time_range,
        y_range: y_min..y_max,
        series: vec![PlotSeries {
            data,
            label: axis_name.to_string(),
            color: *AXIS_COLORS[axis_index],
            stroke_width: LINE_WIDTH_PLOT,
        }],
        x_label: "Time (UTC)".to_string(),
        y_label: axis_name.to_string(),
        x_format: XAxisFormat::EpochClock,
        peaks: Vec::new(),
    })
}

/// Generates the stacked x / y / z offset plot against time, one row per axis.
pub fn plot_gaze_offsets(
    frame: &SampleFrame,
    root_name: &str,
    output_dir: &Path,
) -> Result<(), Box<dyn Error>> {
    let output_file = output_file_path(output_dir, root_name, "Gaze_Offsets_stacked", "png");
    let plot_type_name = "Gaze Offsets Over Time";

    let times = frame.t.to_vec();
    let (time_min, time_max) = time_bounds(&times);

    draw_stacked_plot(
        &output_file,
        &format!("{root_name}: {plot_type_name}"),
        plot_type_name,
        AXIS_COUNT,
        (PLOT_WIDTH, PLOT_HEIGHT),
        |axis_index| offset_plot_config(frame, &times, time_min..time_max, axis_index),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_input::log_parser::parse_log_reader;

    #[test]
    fn test_rows_share_full_time_span_when_unordered() {
        let log = r#"{"t": 20.0, "x": 0.11, "y": 0.5, "z": 0.8, "radius": 0.51, "theta_deg": 77.6, "xyz_magnitude": 1.0}
{"t": 21.0, "x": 0.12, "y": 0.5, "z": 0.8, "radius": 0.51, "theta_deg": 76.5, "xyz_magnitude": 1.0}
{"t": 10.0, "x": 0.13, "y": 0.5, "z": 0.8, "radius": 0.52, "theta_deg": 75.4, "xyz_magnitude": 1.0}
"#;
        let frame = parse_log_reader(log.as_bytes()).unwrap();
        let times = frame.t.to_vec();
        let (lo, hi) = time_bounds(&times);
        for axis_index in 0..AXIS_COUNT {
            let config = offset_plot_config(&frame, &times, lo..hi, axis_index).unwrap();
            assert_eq!(config.x_range, 10.0..21.0);
            assert_eq!(config.is_drawable(), Ok(()));
        }
    }
}

// src/plot_functions/plot_gaze_offsets.rs
