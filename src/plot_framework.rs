// src/plot_framework.rs

use chrono::{DateTime, Utc};
use plotters::backend::BitMapBackend;
use plotters::chart::{ChartBuilder, ChartContext, SeriesLabelPosition};
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::coord::cartesian::Cartesian2d;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{Circle, PathElement, Rectangle, Text};
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, RED, WHITE};
use plotters::style::{Color, IntoFont, RGBColor};

use std::error::Error;
use std::ops::Range;
use std::path::Path;

use crate::constants::{
    COLOR_BAR_STEPS, COLOR_BAR_WIDTH_PX, COLOR_REFERENCE_LINE, FONT_SIZE_MESSAGE,
    FONT_SIZE_PEAK_LABEL, HISTOGRAM_BAR_OPACITY, LINE_WIDTH_LEGEND, MAX_PEAKS_TO_LABEL,
    PEAK_LABEL_BOTTOM_MARGIN_PX,
};
use crate::font_config::{
    FONT_TUPLE_AXIS_LABEL, FONT_TUPLE_CHART_TITLE, FONT_TUPLE_LEGEND, FONT_TUPLE_MAIN_TITLE,
    FONT_TUPLE_MESSAGE, FONT_TUPLE_PEAK_LABEL,
};

type Area<'a> = DrawingArea<BitMapBackend<'a>, Shift>;
type Chart2d<'a, 'b> = ChartContext<'a, BitMapBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    (min - padding, max + padding)
}

/// Finite (min, max) of the second component, `None` if nothing is finite.
pub fn value_bounds(data: &[(f64, f64)]) -> Option<(f64, f64)> {
    let (min, max) = data
        .iter()
        .map(|p| p.1)
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if min.is_finite() && max.is_finite() {
        Some((min, max))
    } else {
        None
    }
}

/// Decimal places needed to tell apart ticks spread over `span` (about ten ticks).
pub fn tick_decimals(span: f64) -> usize {
    if !span.is_finite() || span <= 0.0 {
        return 1;
    }
    let step = span / 10.0;
    (-step.log10()).ceil().clamp(0.0, 9.0) as usize
}

/// Plain tick value with precision following the axis span. Fractional values
/// below 10 always keep at least one decimal.
fn format_scaled(value: f64, span: f64) -> String {
    let mut decimals = tick_decimals(span);
    if value.abs() < 10.0 && value.fract() != 0.0 {
        decimals = decimals.max(1);
    }
    format!("{:.*}", decimals, value)
}

/// Formats Y tick labels: k/M notation for large values, span-dependent
/// decimals below that, integers for dB axes.
pub fn format_y_tick(y: f64, y_label: &str, span: f64) -> String {
    if !y_label.contains("dB") {
        if y.abs() >= 1_000_000.0 {
            format!("{:.1}M", y / 1_000_000.0)
        } else if y.abs() >= 1000.0 {
            format!("{:.0}k", y / 1000.0)
        } else {
            format_scaled(y, span)
        }
    } else {
        format!("{:.0}", y)
    }
}

/// Renders epoch seconds as a UTC wall-clock tick label (`HH:MM:SS.mmm`).
pub fn format_epoch_clock(epoch_seconds: f64) -> String {
    crate::data_input::log_parser::epoch_seconds_to_datetime(epoch_seconds)
        .map(|dt: DateTime<Utc>| dt.format("%H:%M:%S%.3f").to_string())
        .unwrap_or_else(|| format!("{epoch_seconds:.3}"))
}

/// How X tick values are rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum XAxisFormat {
    Numeric,
    /// X values are epoch seconds, shown as calendar clock time.
    EpochClock,
}

fn format_x_tick(x: f64, format: XAxisFormat, span: f64) -> String {
    match format {
        XAxisFormat::Numeric => format_scaled(x, span),
        XAxisFormat::EpochClock => format_epoch_clock(x),
    }
}

/// Text lines of the "Data Unavailable" panel, one `Text` element each.
fn unavailable_message_lines(plot_type: &str, reason: &str) -> Vec<String> {
    format!("{plot_type} Data Unavailable:\n{reason}")
        .lines()
        .map(str::to_string)
        .collect()
}

/// Draw a "Data Unavailable" message on a plot area.
pub fn draw_unavailable_message(
    area: &Area,
    plot_type: &str,
    reason: &str,
) -> Result<(), Box<dyn Error>> {
    // Constants for text rendering
    const CHAR_WIDTH_RATIO: f32 = 0.6; // Approximate character width relative to font size
    const LINE_HEIGHT_SPACING: i32 = 4;

    let (x_range, y_range) = area.get_pixel_range();
    let (width, height) = (
        (x_range.end - x_range.start) as u32,
        (y_range.end - y_range.start) as u32,
    );

    let estimated_char_width = (FONT_SIZE_MESSAGE as f32 * CHAR_WIDTH_RATIO) as i32;
    let estimated_line_height = FONT_SIZE_MESSAGE + LINE_HEIGHT_SPACING;

    let lines = unavailable_message_lines(plot_type, reason);
    let max_line_length = lines.iter().map(|line| line.len()).max().unwrap_or(0);
    let estimated_text_width = max_line_length.saturating_mul(estimated_char_width as usize) as i32;
    let estimated_text_height = lines.len().saturating_mul(estimated_line_height as usize) as i32;

    let center_x = width as i32 / 2 - estimated_text_width / 2;
    let center_y = height as i32 / 2 - estimated_text_height / 2;

    let text_style = FONT_TUPLE_MESSAGE.into_font().color(&RED);
    for (line_idx, line) in lines.iter().enumerate() {
        let line_y = center_y + line_idx as i32 * estimated_line_height;
        area.draw(&Text::new(line.as_str(), (center_x, line_y), text_style.clone()))?;
    }
    Ok(())
}

#[derive(Clone)]
pub struct PlotSeries {
    pub data: Vec<(f64, f64)>,
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: u32,
}

#[derive(Clone)]
pub struct PlotConfig {
    pub title: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub series: Vec<PlotSeries>,
    pub x_label: String,
    pub y_label: String,
    pub x_format: XAxisFormat,
    /// (frequency, amplitude) pairs to annotate, largest first.
    pub peaks: Vec<(f64, f64)>,
}

impl PlotConfig {
    /// `Err` with a short reason when nothing sensible can be drawn.
    pub fn is_drawable(&self) -> Result<(), &'static str> {
        if !self.series.iter().any(|s| !s.data.is_empty()) {
            Err("No data points")
        } else if !(self.x_range.end > self.x_range.start && self.y_range.end > self.y_range.start) {
            Err("Invalid ranges")
        } else {
            Ok(())
        }
    }
}

/// Scatter points colored by a continuous value.
#[derive(Clone)]
pub struct ScatterPlotConfig {
    pub title: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    /// (x, y, color value) triples.
    pub points: Vec<(f64, f64, f64)>,
    pub color_range: Range<f64>,
    pub x_label: String,
    pub y_label: String,
    pub color_label: String,
    pub point_size: u32,
    /// Draw dashed reference lines through x = 0 and y = 0.
    pub origin_crosshair: bool,
}

#[derive(Clone)]
pub struct HistogramPlotConfig {
    pub title: String,
    /// `counts.len() + 1` ascending bin edges.
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
    pub bar_color: RGBColor,
    /// Optional overlay already scaled to the count axis.
    pub overlay: Option<PlotSeries>,
    pub x_label: String,
    pub y_label: String,
}

#[derive(Clone)]
pub struct HeatmapData {
    pub x_bins: Vec<f64>,
    pub y_bins: Vec<f64>,
    /// values[x_idx][y_idx]
    pub values: Vec<Vec<f64>>,
}

#[derive(Clone)]
pub struct HeatmapPlotConfig {
    pub title: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub heatmap_data: HeatmapData,
    pub x_label: String,
    pub y_label: String,
    pub color_label: String,
    pub value_range: Range<f64>,
}

/// Maps `value` within [min, max] onto the viridis colormap.
pub fn map_value_to_color(value: f64, min: f64, max: f64) -> RGBColor {
    if !value.is_finite() || !min.is_finite() || !max.is_finite() {
        return RGBColor(0, 0, 0); // Black for invalid values
    }
    let span = (max - min).abs().max(1e-9);
    let t = ((value.clamp(min.min(max), max.max(min)) - min) / span).clamp(0.0, 1.0);
    let color = colorous::VIRIDIS.eval_continuous(t);
    RGBColor(color.r, color.g, color.b)
}

fn draw_main_title(root_area: &Area, root_name: &str) -> Result<(), Box<dyn Error>> {
    root_area.draw(&Text::new(
        root_name,
        (10, 10),
        FONT_TUPLE_MAIN_TITLE.into_font().color(&BLACK),
    ))?;
    Ok(())
}

fn build_chart<'a, 'b>(
    area: &'a Area<'b>,
    title: &str,
    x_range: Range<f64>,
    y_range: Range<f64>,
) -> Result<Chart2d<'a, 'b>, Box<dyn Error>> {
    let chart = ChartBuilder::on(area)
        .caption(title, FONT_TUPLE_CHART_TITLE)
        .margin(5)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range, y_range)?;
    Ok(chart)
}

/// Draws a vertical or horizontal dashed line inside the chart's coordinate space.
fn draw_dashed_line(
    chart: &mut Chart2d,
    from: (f64, f64),
    to: (f64, f64),
    color: &RGBColor,
) -> Result<(), Box<dyn Error>> {
    const NUM_DASHES: usize = 40;
    let dx = (to.0 - from.0) / (NUM_DASHES as f64 * 2.0);
    let dy = (to.1 - from.1) / (NUM_DASHES as f64 * 2.0);
    for i in 0..NUM_DASHES {
        let start = (from.0 + dx * 2.0 * i as f64, from.1 + dy * 2.0 * i as f64);
        let end = (start.0 + dx, start.1 + dy);
        chart.draw_series(LineSeries::new(vec![start, end], color.stroke_width(1)))?;
    }
    Ok(())
}

/// Draws a single line chart using a PlotConfig, with legend and optional peak labels.
fn draw_single_axis_chart_with_config(
    area: &Area,
    plot_config: &PlotConfig,
) -> Result<(), Box<dyn Error>> {
    let mut chart = build_chart(
        area,
        &plot_config.title,
        plot_config.x_range.clone(),
        plot_config.y_range.clone(),
    )?;

    let x_format = plot_config.x_format;
    let x_span = plot_config.x_range.end - plot_config.x_range.start;
    let y_span = plot_config.y_range.end - plot_config.y_range.start;
    chart
        .configure_mesh()
        .x_desc(&plot_config.x_label)
        .y_desc(&plot_config.y_label)
        .x_labels(12)
        .y_labels(10)
        .x_label_formatter(&|x| format_x_tick(*x, x_format, x_span))
        .y_label_formatter(&|y| format_y_tick(*y, &plot_config.y_label, y_span))
        .light_line_style(WHITE.mix(0.7))
        .label_style(FONT_TUPLE_AXIS_LABEL)
        .draw()?;

    let mut legend_series_count = 0;
    for s in plot_config.series.iter().filter(|s| !s.data.is_empty()) {
        let series = chart.draw_series(LineSeries::new(
            s.data.iter().cloned(),
            s.color.stroke_width(s.stroke_width),
        ))?;
        if !s.label.is_empty() {
            let color = s.color;
            series.label(&s.label).legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(LINE_WIDTH_LEGEND))
            });
            legend_series_count += 1;
        }
    }

    if legend_series_count > 0 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(FONT_TUPLE_LEGEND)
            .draw()?;
    }

    draw_peak_labels(area, &chart, plot_config)?;
    Ok(())
}

/// Labels peaks along the bottom of the plot area, primary peak on the top row.
fn draw_peak_labels(
    area: &Area,
    chart: &Chart2d,
    plot_config: &PlotConfig,
) -> Result<(), Box<dyn Error>> {
    const LABEL_HEIGHT: i32 = 20;
    const CHAR_WIDTH_RATIO: f32 = 0.6;

    let area_offset = area.get_base_pixel();
    let (area_x_range, area_y_range) = area.get_pixel_range();
    let area_width = area_x_range.end - area_x_range.start;
    let area_height = area_y_range.end - area_y_range.start;
    // One extra decimal over the axis ticks.
    let y_span = (plot_config.y_range.end - plot_config.y_range.start) / 10.0;

    for (peak_idx, &(peak_freq, peak_amp)) in plot_config
        .peaks
        .iter()
        .take(MAX_PEAKS_TO_LABEL)
        .enumerate()
    {
        let label_text = if peak_idx == 0 {
            format!("▲ Primary Peak: {} at {peak_freq:.2} Hz", format_y_tick(peak_amp, &plot_config.y_label, y_span))
        } else {
            format!("▲ Peak: {} at {peak_freq:.2} Hz", format_y_tick(peak_amp, &plot_config.y_label, y_span))
        };
        let label_width =
            (label_text.chars().count() as f32 * FONT_SIZE_PEAK_LABEL as f32 * CHAR_WIDTH_RATIO) as i32;

        let peak_x_pixel = chart
            .backend_coord(&(peak_freq, plot_config.y_range.start))
            .0
            - area_offset.0;
        let target_row = (MAX_PEAKS_TO_LABEL - 1 - peak_idx) as i32;
        let text_y = area_height - target_row * LABEL_HEIGHT - PEAK_LABEL_BOTTOM_MARGIN_PX;

        // Right-align labels that would run off the right edge.
        let (text, text_x) = if peak_x_pixel + label_width <= area_width {
            (label_text, peak_x_pixel - FONT_SIZE_PEAK_LABEL / 4)
        } else {
            let right_aligned = format!("{} ▲", label_text.trim_start_matches('▲').trim_start());
            (right_aligned, (peak_x_pixel - label_width).max(0))
        };

        area.draw(&Text::new(
            text,
            (text_x, text_y),
            FONT_TUPLE_PEAK_LABEL.into_font().color(&BLACK),
        ))?;
    }
    Ok(())
}

/// Draws a vertical color scale for `value_range` into `area`.
fn draw_color_bar(
    area: &Area,
    value_range: Range<f64>,
    label: &str,
) -> Result<(), Box<dyn Error>> {
    let (lo, hi) = (value_range.start, value_range.end);
    if !(hi > lo) {
        return Ok(());
    }
    let mut chart = ChartBuilder::on(area)
        .margin_top(60)
        .margin_bottom(55)
        .margin_right(10)
        .y_label_area_size(80)
        .build_cartesian_2d(0.0f64..1.0f64, lo..hi)?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(0)
        .y_labels(8)
        .y_desc(label)
        .y_label_formatter(&|v| format_scaled(*v, hi - lo))
        .label_style(FONT_TUPLE_AXIS_LABEL)
        .draw()?;

    let step = (hi - lo) / COLOR_BAR_STEPS as f64;
    chart.draw_series((0..COLOR_BAR_STEPS).map(|i| {
        let v0 = lo + step * i as f64;
        let color = map_value_to_color(v0 + step * 0.5, lo, hi);
        Rectangle::new([(0.0, v0), (1.0, v0 + step)], color.filled())
    }))?;
    Ok(())
}

fn present(root_area: &Area, output_path: &Path, drew_anything: bool) -> Result<(), Box<dyn Error>> {
    root_area.present()?;
    if drew_anything {
        log::info!("  Plot saved as '{}'.", output_path.display());
    } else {
        log::warn!(
            "  '{}' contains only placeholder messages: no data available to plot.",
            output_path.display()
        );
    }
    Ok(())
}

/// Creates a stacked plot image with one row per entry of `rows`, sharing the canvas.
pub fn draw_stacked_plot<F>(
    output_path: &Path,
    root_name: &str,
    plot_type_name: &str,
    rows: usize,
    size: (u32, u32),
    mut get_row_plot_data: F,
) -> Result<(), Box<dyn Error>>
where
    F: FnMut(usize) -> Option<PlotConfig>,
{
    let root_area = BitMapBackend::new(output_path, size).into_drawing_area();
    root_area.fill(&WHITE)?;
    draw_main_title(&root_area, root_name)?;
    let margined_root_area = root_area.margin(50, 5, 5, 5);
    let sub_plot_areas = margined_root_area.split_evenly((rows.max(1), 1));
    let mut any_row_plotted = false;

    for (row_index, area) in sub_plot_areas.iter().enumerate() {
        match get_row_plot_data(row_index) {
            Some(plot_config) => match plot_config.is_drawable() {
                Ok(()) => {
                    draw_single_axis_chart_with_config(area, &plot_config)?;
                    any_row_plotted = true;
                }
                Err(reason) => draw_unavailable_message(area, &plot_config.title, reason)?,
            },
            None => draw_unavailable_message(area, plot_type_name, "Data Extraction Failed")?,
        }
    }

    present(&root_area, output_path, any_row_plotted)
}

/// Creates a single-chart line plot image.
pub fn draw_line_plot(
    output_path: &Path,
    root_name: &str,
    size: (u32, u32),
    plot_config: &PlotConfig,
) -> Result<(), Box<dyn Error>> {
    draw_stacked_plot(output_path, root_name, &plot_config.title, 1, size, |_| {
        Some(plot_config.clone())
    })
}

/// Creates a scatter plot image with a color bar for the point values.
pub fn draw_scatter_plot(
    output_path: &Path,
    root_name: &str,
    size: (u32, u32),
    config: &ScatterPlotConfig,
) -> Result<(), Box<dyn Error>> {
    let root_area = BitMapBackend::new(output_path, size).into_drawing_area();
    root_area.fill(&WHITE)?;
    draw_main_title(&root_area, root_name)?;
    let margined_root_area = root_area.margin(50, 5, 5, 5);
    let (plot_width, _) = margined_root_area.dim_in_pixel();
    let (plot_area, bar_area) =
        margined_root_area.split_horizontally(plot_width.saturating_sub(COLOR_BAR_WIDTH_PX));

    let valid_ranges = config.x_range.end > config.x_range.start
        && config.y_range.end > config.y_range.start;
    if config.points.is_empty() || !valid_ranges {
        let reason = if config.points.is_empty() { "No data points" } else { "Invalid ranges" };
        draw_unavailable_message(&plot_area, &config.title, reason)?;
        return present(&root_area, output_path, false);
    }

    let mut chart = build_chart(&plot_area, &config.title, config.x_range.clone(), config.y_range.clone())?;
    chart
        .configure_mesh()
        .x_desc(&config.x_label)
        .y_desc(&config.y_label)
        .x_labels(10)
        .y_labels(10)
        .light_line_style(WHITE.mix(0.7))
        .label_style(FONT_TUPLE_AXIS_LABEL)
        .draw()?;

    if config.origin_crosshair {
        let (x0, x1) = (config.x_range.start, config.x_range.end);
        let (y0, y1) = (config.y_range.start, config.y_range.end);
        if (y0..=y1).contains(&0.0) {
            draw_dashed_line(&mut chart, (x0, 0.0), (x1, 0.0), COLOR_REFERENCE_LINE)?;
        }
        if (x0..=x1).contains(&0.0) {
            draw_dashed_line(&mut chart, (0.0, y0), (0.0, y1), COLOR_REFERENCE_LINE)?;
        }
    }

    let (c_lo, c_hi) = (config.color_range.start, config.color_range.end);
    chart.draw_series(config.points.iter().map(|&(x, y, c)| {
        Circle::new((x, y), config.point_size, map_value_to_color(c, c_lo, c_hi).filled())
    }))?;

    draw_color_bar(&bar_area, config.color_range.clone(), &config.color_label)?;
    present(&root_area, output_path, true)
}

/// Creates a histogram image with an optional line overlay (e.g. a density curve).
pub fn draw_histogram_plot(
    output_path: &Path,
    root_name: &str,
    size: (u32, u32),
    config: &HistogramPlotConfig,
) -> Result<(), Box<dyn Error>> {
    let root_area = BitMapBackend::new(output_path, size).into_drawing_area();
    root_area.fill(&WHITE)?;
    draw_main_title(&root_area, root_name)?;
    let plot_area = root_area.margin(50, 5, 5, 5);

    if config.counts.is_empty() || config.edges.len() != config.counts.len() + 1 {
        draw_unavailable_message(&plot_area, &config.title, "No data points")?;
        return present(&root_area, output_path, false);
    }

    let x_lo = config.edges[0];
    let x_hi = config.edges[config.edges.len() - 1];
    let overlay_max = config
        .overlay
        .as_ref()
        .and_then(|s| value_bounds(&s.data))
        .map(|(_, hi)| hi)
        .unwrap_or(0.0);
    let max_count = config.counts.iter().copied().max().unwrap_or(0) as f64;
    let y_hi = max_count.max(overlay_max).max(1.0) * 1.1;

    let mut chart = build_chart(&plot_area, &config.title, x_lo..x_hi, 0.0..y_hi)?;
    chart
        .configure_mesh()
        .x_desc(&config.x_label)
        .y_desc(&config.y_label)
        .x_labels(20)
        .y_labels(10)
        .y_label_formatter(&|y| format_y_tick(*y, &config.y_label, y_hi))
        .light_line_style(WHITE.mix(0.7))
        .label_style(FONT_TUPLE_AXIS_LABEL)
        .draw()?;

    let bar_style = config.bar_color.mix(HISTOGRAM_BAR_OPACITY).filled();
    chart.draw_series(config.counts.iter().enumerate().map(|(i, &count)| {
        Rectangle::new([(config.edges[i], 0.0), (config.edges[i + 1], count as f64)], bar_style)
    }))?;

    if let Some(overlay) = config.overlay.as_ref().filter(|s| !s.data.is_empty()) {
        let series = chart.draw_series(LineSeries::new(
            overlay.data.iter().cloned(),
            overlay.color.stroke_width(overlay.stroke_width),
        ))?;
        if !overlay.label.is_empty() {
            let color = overlay.color;
            series.label(&overlay.label).legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(LINE_WIDTH_LEGEND))
            });
            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperRight)
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .label_font(FONT_TUPLE_LEGEND)
                .draw()?;
        }
    }

    present(&root_area, output_path, true)
}

/// Half the spacing between neighbouring bins, or `fallback` for a single bin.
fn half_bin_width(bins: &[f64], fallback: f64) -> f64 {
    if bins.len() > 1 {
        (bins[1] - bins[0]) * 0.5
    } else {
        fallback * 0.5
    }
}

/// Creates a heat map image (e.g. a spectrogram) with a color bar legend.
pub fn draw_heatmap_plot(
    output_path: &Path,
    root_name: &str,
    size: (u32, u32),
    config: &HeatmapPlotConfig,
) -> Result<(), Box<dyn Error>> {
    let root_area = BitMapBackend::new(output_path, size).into_drawing_area();
    root_area.fill(&WHITE)?;
    draw_main_title(&root_area, root_name)?;
    let margined_root_area = root_area.margin(50, 5, 5, 5);
    let (plot_width, _) = margined_root_area.dim_in_pixel();
    let (plot_area, bar_area) =
        margined_root_area.split_horizontally(plot_width.saturating_sub(COLOR_BAR_WIDTH_PX));

    let data = &config.heatmap_data;
    let has_data = data.values.iter().any(|row| !row.is_empty());
    let valid_ranges = config.x_range.end > config.x_range.start
        && config.y_range.end > config.y_range.start;
    if !has_data || !valid_ranges {
        let reason = if !has_data { "No data points" } else { "Invalid ranges" };
        draw_unavailable_message(&plot_area, &config.title, reason)?;
        return present(&root_area, output_path, false);
    }

    let y_span = config.y_range.end - config.y_range.start;
    let mut chart = build_chart(&plot_area, &config.title, config.x_range.clone(), config.y_range.clone())?;
    chart
        .configure_mesh()
        .x_desc(&config.x_label)
        .y_desc(&config.y_label)
        .x_labels(10)
        .y_labels(10)
        .y_label_formatter(&|y| format_y_tick(*y, &config.y_label, y_span))
        .light_line_style(WHITE.mix(0.7))
        .label_style(FONT_TUPLE_AXIS_LABEL)
        .draw()?;

    let x_half = half_bin_width(&data.x_bins, config.x_range.end - config.x_range.start);
    let y_half = half_bin_width(&data.y_bins, config.y_range.end - config.y_range.start);
    let (v_lo, v_hi) = (config.value_range.start, config.value_range.end);

    for (x_idx, &x_val) in data.x_bins.iter().enumerate() {
        let Some(row) = data.values.get(x_idx) else {
            continue;
        };
        chart.draw_series(data.y_bins.iter().zip(row.iter()).map(|(&y_val, &value)| {
            Rectangle::new(
                [(x_val - x_half, y_val - y_half), (x_val + x_half, y_val + y_half)],
                map_value_to_color(value, v_lo, v_hi).filled(),
            )
        }))?;
    }

    draw_color_bar(&bar_area, config.value_range.clone(), &config.color_label)?;
    present(&root_area, output_path, true)
}


// src/plot_framework.rs
