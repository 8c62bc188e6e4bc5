// src/plot_functions/plot_fft_spectrum.rs

use log::info;
use std::error::Error;
use std::path::Path;

use crate::constants::{
    COLOR_SPECTRUM, LINE_WIDTH_PLOT, SPECTRUM_PLOT_HEIGHT, SPECTRUM_PLOT_WIDTH,
    SPECTRUM_Y_AXIS_FLOOR, SPECTRUM_Y_AXIS_HEADROOM_FACTOR,
};
use crate::data_analysis::spectral_analysis::Spectrum;
use crate::plot_framework::{draw_line_plot, PlotConfig, PlotSeries, XAxisFormat};
use crate::plot_functions::output_file_path;
use crate::plot_functions::peak_detection::find_and_sort_peaks;

/// Writes `frequency_hz,magnitude` rows for one spectrum.
pub fn export_spectrum_csv(spectrum: &Spectrum, path: &Path) -> Result<(), Box<dyn Error>> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["frequency_hz", "magnitude"])?;
    for (freq, mag) in spectrum.points() {
        writer.write_record(&[freq.to_string(), mag.to_string()])?;
    }
    writer.flush()?;
    info!("  Spectrum data exported to '{}'.", path.display());
    Ok(())
}

/// Generates the one-sided FFT magnitude plot for one signal.
///
/// `file_tag` names the output (`<root>_FFT_Spectrum_<file_tag>.png`), `label`
/// goes into the title. With `export_csv` the spectrum is also written next
/// to the image.
pub fn plot_fft_spectrum(
    spectrum: &Spectrum,
    label: &str,
    file_tag: &str,
    root_name: &str,
    output_dir: &Path,
    export_csv: bool,
) -> Result<(), Box<dyn Error>> {
    let plot_name = format!("FFT_Spectrum_{file_tag}");
    let output_file = output_file_path(output_dir, root_name, &plot_name, "png");

    let data = spectrum.points();
    let peaks = find_and_sort_peaks(&data, label);
    let max_magnitude = spectrum
        .magnitudes
        .iter()
        .copied()
        .filter(|m| m.is_finite())
        .fold(0.0f64, f64::max);
    let y_max = (max_magnitude * SPECTRUM_Y_AXIS_HEADROOM_FACTOR).max(SPECTRUM_Y_AXIS_FLOOR);

    let config = PlotConfig {
        title: format!("FFT Spectrum of {label}"),
        x_range: 0.0..spectrum.nyquist(),
        y_range: 0.0..y_max,
        series: vec![PlotSeries {
            data,
            label: label.to_string(),
            color: *COLOR_SPECTRUM,
            stroke_width: LINE_WIDTH_PLOT,
        }],
        x_label: "Frequency (Hz)".to_string(),
        y_label: "Magnitude".to_string(),
        x_format: XAxisFormat::Numeric,
        peaks,
    };

    draw_line_plot(
        &output_file,
        root_name,
        (SPECTRUM_PLOT_WIDTH, SPECTRUM_PLOT_HEIGHT),
        &config,
    )?;

    if export_csv {
        let csv_file = output_file_path(output_dir, root_name, &plot_name, "csv");
        export_spectrum_csv(spectrum, &csv_file)?;
    }
    Ok(())
}


// src/plot_functions/plot_fft_spectrum.rs
