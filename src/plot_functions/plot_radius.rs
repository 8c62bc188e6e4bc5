// src/plot_functions/plot_radius.rs

use std::error::Error;
use std::path::Path;

use crate::constants::{COLOR_RADIUS, LINE_WIDTH_PLOT, PLOT_HEIGHT, PLOT_WIDTH};
use crate::data_input::log_data::SampleFrame;
use crate::plot_framework::{
    calculate_range, draw_line_plot, value_bounds, PlotConfig, PlotSeries, XAxisFormat,
};
use crate::plot_functions::{output_file_path, time_bounds, time_series};

fn radius_plot_config(frame: &SampleFrame) -> PlotConfig {
    let times = frame.t.to_vec();
    let data = time_series(&times, &frame.radius.to_vec());

    let (y_min, y_max) = value_bounds(&data)
        .map(|(lo, hi)| calculate_range(lo, hi))
        .unwrap_or((0.0, 0.0));
    let (time_min, time_max) = time_bounds(&times);

    PlotConfig {
        title: "Radius Over Time".to_string(),
        x_range: time_min..time_max,
        y_range: y_min..y_max,
        series: vec![PlotSeries {
            data,
            label: "radius".to_string(),
            color: *COLOR_RADIUS,
            stroke_width: LINE_WIDTH_PLOT,
        }],
        x_label: "Time (UTC)".to_string(),
        y_label: "radius".to_string(),
        x_format: XAxisFormat::EpochClock,
        peaks: Vec::new(),
    }
}

/// Generates the radius-over-time line chart.
pub fn plot_radius(
    frame: &SampleFrame,
    root_name: &str,
    output_dir: &Path,
) -> Result<(), Box<dyn Error>> {
    let output_file = output_file_path(output_dir, root_name, "Radius", "png");
    let config = radius_plot_config(frame);
    draw_line_plot(&output_file, root_name, (PLOT_WIDTH, PLOT_HEIGHT), &config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_input::log_parser::parse_log_reader;

    #[test]
    fn test_late_stamped_record_keeps_chart_drawable() {
        let log = r#"{"t": 1000.0, "x": 0.1, "y": 0.2, "z": 0.9, "radius": 0.22, "theta_deg": 63.4, "xyz_magnitude": 1.0}
{"t": 1000.5, "x": 0.2, "y": 0.1, "z": 0.9, "radius": 0.22, "theta_deg": 26.6, "xyz_magnitude": 1.0}
{"t": 999.0, "x": 0.3, "y": 0.1, "z": 0.9, "radius": 0.32, "theta_deg": 18.4, "xyz_magnitude": 1.0}
"#;
        let frame = parse_log_reader(log.as_bytes()).unwrap();
        let config = radius_plot_config(&frame);
        assert_eq!(config.x_range, 999.0..1000.5);
        assert_eq!(config.is_drawable(), Ok(()));
    }
}

// src/plot_functions/plot_radius.rs
