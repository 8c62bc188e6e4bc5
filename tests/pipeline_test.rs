// tests/pipeline_test.rs

use std::f64::consts::PI;
use std::io::Write;

use gaze_jsonl_render::data_analysis::spectral_analysis::{compute_spectrum, infer_sample_rate};
use gaze_jsonl_render::data_analysis::spectrogram::compute_spectrogram;
use gaze_jsonl_render::data_input::log_parser::parse_log_file;
use gaze_jsonl_render::error::{AnalysisError, IngestError};
use gaze_jsonl_render::pipeline::{run, RunOptions};
use gaze_jsonl_render::report::FrameReport;

fn record(t: f64, x: f64, y: f64, z: f64) -> String {
    let radius = (x * x + y * y).sqrt();
    let theta_deg = y.atan2(x).to_degrees();
    let xyz_magnitude = (x * x + y * y + z * z).sqrt();
    format!(
        "{{\"t\": {t}, \"x\": {x}, \"y\": {y}, \"z\": {z}, \"radius\": {radius}, \"theta_deg\": {theta_deg}, \"xyz_magnitude\": {xyz_magnitude}, \"source\": \"tracker\"}}"
    )
}

fn write_log(lines: &[String]) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".jsonl").tempfile().unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    file.flush().unwrap();
    file
}

#[test]
fn test_ingest_to_spectrum() {
    // 50 Hz sampling, x oscillates at 5 Hz, y at 12.5 Hz.
    let fs = 50.0;
    let start = 1_700_000_000.0;
    let lines: Vec<String> = (0..200)
        .map(|i| {
            let t = i as f64 / fs;
            record(
                start + t,
                (2.0 * PI * 5.0 * t).sin(),
                0.5 * (2.0 * PI * 12.5 * t).cos(),
                0.1,
            )
        })
        .collect();
    let file = write_log(&lines);

    let frame = parse_log_file(file.path()).unwrap();
    assert_eq!(frame.len(), 200);
    assert!(frame.time.windows(2).all(|w| w[0] < w[1]));

    let sample_rate = infer_sample_rate(&frame.t.to_vec()).unwrap();
    assert!((sample_rate - fs).abs() < 1e-2, "sample rate {sample_rate}");

    let x_spectrum = compute_spectrum(&frame.x, sample_rate).unwrap();
    assert_eq!(x_spectrum.frequencies.len(), 101);
    let x_peak = x_spectrum.dominant_bin().unwrap();
    assert!((x_spectrum.frequencies[x_peak] - 5.0).abs() < 0.3);

    let y_spectrum = compute_spectrum(&frame.y, sample_rate).unwrap();
    let y_peak = y_spectrum.dominant_bin().unwrap();
    assert!((y_spectrum.frequencies[y_peak] - 12.5).abs() < 0.3);

    // z is constant: nothing left after DC removal.
    let z_spectrum = compute_spectrum(&frame.z, sample_rate).unwrap();
    assert!(z_spectrum.magnitudes.iter().all(|m| m.abs() < 1e-9));

    let spectrogram = compute_spectrogram(&frame.xyz_magnitude, sample_rate).unwrap();
    assert_eq!(spectrogram.segment_len, 200);
    assert_eq!(spectrogram.times.len(), 1);

    let report = FrameReport::from_frame(&frame).to_string();
    assert!(report.contains("RangeIndex: 200 entries, 0 to 199"));
}

#[test]
fn test_run_writes_every_plot_and_spectrum_export() {
    // Unit-normalized gaze direction drifting around the forward axis, 30 Hz.
    let fs = 30.0;
    let start = 1_700_000_000.0;
    let mut lines: Vec<String> = (0..300)
        .map(|i| {
            let t = i as f64 / fs;
            let x = 0.1 * (2.0 * PI * 1.5 * t).sin();
            let y = 0.05 * (2.0 * PI * 4.0 * t).cos();
            let z = (1.0 - x * x - y * y).sqrt();
            record(start + t, x, y, z)
        })
        .collect();
    // One late-stamped record must not break the time axes.
    lines.push(record(start - 0.5, 0.02, 0.01, 0.999));
    let file = write_log(&lines);
    let stem = file
        .path()
        .file_stem()
        .unwrap()
        .to_string_lossy()
        .into_owned();

    let dir = tempfile::tempdir().unwrap();
    let output_dir = dir.path().join("plots");
    let options = RunOptions {
        input: file.path().to_path_buf(),
        output_dir: output_dir.clone(),
        sample_rate: None,
        export_csv: true,
    };
    let sample_rate = run(&options).unwrap();
    assert!((sample_rate - fs).abs() < 1e-2, "sample rate {sample_rate}");

    let pngs = [
        "Gaze_Offsets_stacked",
        "Gaze_Scatter",
        "Theta_Distribution",
        "Radius",
        "FFT_Spectrum_x",
        "FFT_Spectrum_y",
        "FFT_Spectrum_z",
        "FFT_Spectrum_magnitude",
        "Magnitude_Spectrogram",
    ];
    for name in pngs {
        let path = output_dir.join(format!("{stem}_{name}.png"));
        let size = std::fs::metadata(&path)
            .unwrap_or_else(|e| panic!("missing {}: {e}", path.display()))
            .len();
        assert!(size > 0, "{} is empty", path.display());
    }
    for tag in ["x", "y", "z", "magnitude"] {
        let path = output_dir.join(format!("{stem}_FFT_Spectrum_{tag}.csv"));
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("frequency_hz,magnitude"));
        // Header plus floor(N / 2) + 1 bins for N = 301.
        assert_eq!(contents.lines().count(), 1 + 151);
    }
    let written = std::fs::read_dir(&output_dir).unwrap().count();
    assert_eq!(written, pngs.len() + 4);
}

#[test]
fn test_malformed_line_fails_ingest() {
    let lines = vec![record(0.0, 1.0, 1.0, 1.0), "{\"t\": 1.0, \"x\": ".to_string()];
    let file = write_log(&lines);
    match parse_log_file(file.path()) {
        Err(IngestError::Json { line, .. }) => assert_eq!(line, 2),
        other => panic!("expected a JSON error, got {other:?}"),
    }
}

#[test]
fn test_run_rejects_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let options = RunOptions {
        input: dir.path().join("absent.jsonl"),
        output_dir: dir.path().join("out"),
        sample_rate: None,
        export_csv: false,
    };
    let err = run(&options).unwrap_err();
    assert!(matches!(err.downcast_ref::<IngestError>(), Some(IngestError::Io { .. })));
}

#[test]
fn test_run_rejects_empty_log_before_plotting() {
    let file = write_log(&[]);
    let dir = tempfile::tempdir().unwrap();
    let output_dir = dir.path().join("out");
    let options = RunOptions {
        input: file.path().to_path_buf(),
        output_dir: output_dir.clone(),
        sample_rate: Some(30.0),
        export_csv: true,
    };
    let err = run(&options).unwrap_err();
    assert_eq!(
        err.downcast_ref::<AnalysisError>(),
        Some(&AnalysisError::InsufficientSamples { required: 2, actual: 0 })
    );
    assert!(!output_dir.exists());
}

#[test]
fn test_run_rejects_degenerate_timing() {
    let lines: Vec<String> = (0..10).map(|_| record(5.0, 1.0, 0.0, 0.0)).collect();
    let file = write_log(&lines);
    let dir = tempfile::tempdir().unwrap();
    let options = RunOptions {
        input: file.path().to_path_buf(),
        output_dir: dir.path().join("out"),
        sample_rate: None,
        export_csv: false,
    };
    let err = run(&options).unwrap_err();
    assert_eq!(
        err.downcast_ref::<AnalysisError>(),
        Some(&AnalysisError::InvalidSampleInterval(0.0))
    );
}
