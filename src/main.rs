// src/main.rs

use clap::Parser;
use std::error::Error;
use std::path::PathBuf;

use gaze_jsonl_render::crate_version;
use gaze_jsonl_render::pipeline::{run, RunOptions};

/// Exploratory analysis of a gaze-tracking JSONL event log: descriptive
/// report on stdout, time-domain plots, FFT spectra and a magnitude
/// spectrogram as PNG files.
#[derive(Parser, Debug)]
#[command(name = "gaze_jsonl_render", version = crate_version(), about)]
struct Cli {
    /// Path to the newline-delimited JSON event log
    input: PathBuf,

    /// Directory for the PNG (and CSV) outputs; created if missing
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Sampling rate in Hz; inferred from the timestamps when omitted
    #[arg(long, value_name = "HZ")]
    sample_rate: Option<f64>,

    /// Also write every spectrum as `frequency_hz,magnitude` CSV
    #[arg(long)]
    export_csv: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let options = RunOptions {
        input: cli.input,
        output_dir: cli.output_dir,
        sample_rate: cli.sample_rate,
        export_csv: cli.export_csv,
    };

    run(&options)?;
    Ok(())
}
