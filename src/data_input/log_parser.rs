// src/data_input/log_parser.rs

use chrono::{DateTime, Utc};
use log::{debug, info};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::data_input::log_data::{GazeSample, SampleFrame};
use crate::error::IngestError;

/// Parses the JSONL event log at `input_file_path` into a sample frame.
///
/// Each non-blank line must hold one JSON object with the keys
/// `t, x, y, z, radius, theta_deg, xyz_magnitude`. Blank lines are skipped;
/// any malformed line aborts the whole parse. An empty file yields an empty frame.
pub fn parse_log_file(input_file_path: &Path) -> Result<SampleFrame, IngestError> {
    let file = File::open(input_file_path).map_err(|source| IngestError::Io {
        path: input_file_path.to_path_buf(),
        source,
    })?;
    let frame = parse_log_reader(BufReader::new(file))?;
    info!(
        "Loaded {} samples from '{}'",
        frame.len(),
        input_file_path.display()
    );
    Ok(frame)
}

/// Same contract as [`parse_log_file`] over any buffered reader.
pub fn parse_log_reader<R: BufRead>(reader: R) -> Result<SampleFrame, IngestError> {
    let mut samples: Vec<GazeSample> = Vec::new();
    let mut times: Vec<DateTime<Utc>> = Vec::new();
    let mut blank_lines = 0usize;

    for (line_index, line_result) in reader.lines().enumerate() {
        let line_number = line_index + 1;
        let line = line_result.map_err(|source| IngestError::Read {
            line: line_number,
            source,
        })?;

        let trimmed_line = line.trim();
        if trimmed_line.is_empty() {
            blank_lines += 1;
            continue;
        }

        let sample: GazeSample =
            serde_json::from_str(trimmed_line).map_err(|source| IngestError::Json {
                line: line_number,
                source,
            })?;

        let time = epoch_seconds_to_datetime(sample.t).ok_or(IngestError::InvalidTimestamp {
            line: line_number,
            t: sample.t,
        })?;

        samples.push(sample);
        times.push(time);
    }

    debug!(
        "Parsed {} records, skipped {} blank lines",
        samples.len(),
        blank_lines
    );
    Ok(SampleFrame::from_samples(&samples, times))
}

/// Converts fractional seconds since the UNIX epoch into a UTC timestamp.
/// Returns `None` for non-finite input or instants chrono cannot represent.
pub fn epoch_seconds_to_datetime(t: f64) -> Option<DateTime<Utc>> {
    if !t.is_finite() {
        return None;
    }
    let whole_seconds = t.floor();
    if whole_seconds < i64::MIN as f64 || whole_seconds > i64::MAX as f64 {
        return None;
    }
    let nanos = ((t - whole_seconds) * 1e9).round().clamp(0.0, 999_999_999.0) as u32;
    DateTime::from_timestamp(whole_seconds as i64, nanos)
}


// src/data_input/log_parser.rs
