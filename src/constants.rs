// src/constants.rs

// Import specific colors needed
use plotters::style::colors::full_palette::{BLUE, GREEN, GREY, ORANGE, RED};
use plotters::style::RGBColor;

// Plot dimensions.
pub const PLOT_WIDTH: u32 = 1920;
pub const PLOT_HEIGHT: u32 = 1080;
pub const SCATTER_PLOT_SIZE: u32 = 1080; // Square canvas for x vs y
pub const HISTOGRAM_PLOT_WIDTH: u32 = 1600;
pub const HISTOGRAM_PLOT_HEIGHT: u32 = 800;
pub const SPECTRUM_PLOT_WIDTH: u32 = 1920;
pub const SPECTRUM_PLOT_HEIGHT: u32 = 768;

// Font sizes
pub const FONT_SIZE_MAIN_TITLE: i32 = 24;
pub const FONT_SIZE_CHART_TITLE: i32 = 20;
pub const FONT_SIZE_AXIS_LABEL: i32 = 14;
pub const FONT_SIZE_LEGEND: i32 = 14;
pub const FONT_SIZE_PEAK_LABEL: i32 = 14;
pub const FONT_SIZE_MESSAGE: i32 = 18;

// --- Plot Color Assignments ---
pub const COLOR_OFFSET_X: &RGBColor = &BLUE;
pub const COLOR_OFFSET_Y: &RGBColor = &ORANGE;
pub const COLOR_OFFSET_Z: &RGBColor = &GREEN;
pub const COLOR_RADIUS: &RGBColor = &BLUE;
pub const COLOR_SPECTRUM: &RGBColor = &BLUE;
pub const COLOR_HISTOGRAM_BAR: &RGBColor = &BLUE;
pub const COLOR_KDE: &RGBColor = &RED;
pub const COLOR_REFERENCE_LINE: &RGBColor = &GREY;

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 1;
pub const LINE_WIDTH_LEGEND: u32 = 2;
pub const LINE_WIDTH_KDE: u32 = 2;

// Scatter marker radius in pixels.
pub const SCATTER_POINT_SIZE: u32 = 2;

// Number of rows shown by the "head" section of the report.
pub const REPORT_HEAD_ROWS: usize = 5;

// --- Distribution Constants ---
pub const THETA_HISTOGRAM_BINS: usize = 60;
pub const KDE_GRID_POINTS: usize = 200;
pub const HISTOGRAM_BAR_OPACITY: f64 = 0.6;

// --- Spectrum Constants ---
// Spectra need at least two samples to have a defined DC-removed transform.
pub const MIN_SPECTRUM_SAMPLES: usize = 2;
pub const SPECTRUM_Y_AXIS_HEADROOM_FACTOR: f64 = 1.1;
pub const SPECTRUM_Y_AXIS_FLOOR: f64 = 1e-9;

// Peak labelling on spectrum plots.
pub const MAX_PEAKS_TO_LABEL: usize = 3;
pub const MIN_SECONDARY_PEAK_RATIO: f64 = 0.5;
pub const MIN_PEAK_SEPARATION_BINS: usize = 3;
pub const PEAK_DETECTION_WINDOW_RADIUS: usize = 2;
pub const PEAK_LABEL_BOTTOM_MARGIN_PX: i32 = 60;

// --- Spectrogram Constants ---
pub const SPECTROGRAM_NPERSEG: usize = 256;
pub const SPECTROGRAM_OVERLAP_DIVISOR: usize = 8; // noverlap = nperseg / 8
pub const SPECTROGRAM_TUKEY_ALPHA: f64 = 0.25;
pub const SPECTROGRAM_MIN_POWER_DB: f64 = -200.0; // Floor for log10(0)

// Color bar geometry (pixels).
pub const COLOR_BAR_WIDTH_PX: u32 = 140;
pub const COLOR_BAR_STEPS: usize = 100;

// src/constants.rs
