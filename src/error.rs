// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Failures while turning the JSONL event log into a sample frame.
/// Every variant aborts the run; no partially ingested frame is returned.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("cannot open '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("read error at line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid record at line {line}: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("timestamp t={t} at line {line} is not a representable epoch time")]
    InvalidTimestamp { line: usize, t: f64 },
}

#[derive(Debug, Error, PartialEq)]
pub enum AnalysisError {
    #[error("insufficient samples: need at least {required}, got {actual}")]
    InsufficientSamples { required: usize, actual: usize },
    #[error("invalid sample rate: {0} Hz")]
    InvalidSampleRate(f64),
    #[error("invalid sample interval: median timestamp delta is {0} s")]
    InvalidSampleInterval(f64),
    #[error("fft failed: {0}")]
    Fft(String),
}
