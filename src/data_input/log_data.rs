// src/data_input/log_data.rs

use chrono::{DateTime, Utc};
use ndarray::Array1;
use serde::Deserialize;

/// One gaze reading as it appears on a line of the event log.
/// Keys beyond these seven are ignored during decoding.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct GazeSample {
    pub t: f64,             // Epoch time (seconds).
    pub x: f64,             // Horizontal gaze offset.
    pub y: f64,             // Vertical gaze offset.
    pub z: f64,             // Depth offset.
    pub radius: f64,        // Planar norm of (x, y).
    pub theta_deg: f64,     // Planar angle in degrees.
    pub xyz_magnitude: f64, // Norm of (x, y, z).
}

/// Column-oriented, immutable view of the ingested log.
///
/// Built once by the parser. Columns share the row order of the source file.
#[derive(Debug, Clone)]
pub struct SampleFrame {
    pub t: Array1<f64>,
    pub time: Vec<DateTime<Utc>>, // Derived calendar timestamp for each `t`.
    pub x: Array1<f64>,
    pub y: Array1<f64>,
    pub z: Array1<f64>,
    pub radius: Array1<f64>,
    pub theta_deg: Array1<f64>,
    pub xyz_magnitude: Array1<f64>,
}

/// Names of the numeric columns, in report order.
pub const NUMERIC_COLUMNS: [&str; 7] = ["t", "x", "y", "z", "radius", "theta_deg", "xyz_magnitude"];

/// Name of the derived timestamp column.
pub const TIME_COLUMN: &str = "time";

impl SampleFrame {
    /// Assembles the frame from decoded samples and their derived timestamps.
    /// Both slices must have the same length.
    pub fn from_samples(samples: &[GazeSample], time: Vec<DateTime<Utc>>) -> Self {
        debug_assert_eq!(samples.len(), time.len());
        let column = |f: fn(&GazeSample) -> f64| samples.iter().map(f).collect::<Array1<f64>>();
        Self {
            t: column(|s| s.t),
            time,
            x: column(|s| s.x),
            y: column(|s| s.y),
            z: column(|s| s.z),
            radius: column(|s| s.radius),
            theta_deg: column(|s| s.theta_deg),
            xyz_magnitude: column(|s| s.xyz_magnitude),
        }
    }

    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// Looks up a numeric column by its log key.
    pub fn column(&self, name: &str) -> Option<&Array1<f64>> {
        match name {
            "t" => Some(&self.t),
            "x" => Some(&self.x),
            "y" => Some(&self.y),
            "z" => Some(&self.z),
            "radius" => Some(&self.radius),
            "theta_deg" => Some(&self.theta_deg),
            "xyz_magnitude" => Some(&self.xyz_magnitude),
            _ => None,
        }
    }

    /// Offset column for axis index 0..3 (x, y, z).
    pub fn offset(&self, axis_index: usize) -> &Array1<f64> {
        match axis_index {
            0 => &self.x,
            1 => &self.y,
            _ => &self.z,
        }
    }

    /// Reassembles row `index` as a sample.
    pub fn row(&self, index: usize) -> Option<GazeSample> {
        if index >= self.len() {
            return None;
        }
        Some(GazeSample {
            t: self.t[index],
            x: self.x[index],
            y: self.y[index],
            z: self.z[index],
            radius: self.radius[index],
            theta_deg: self.theta_deg[index],
            xyz_magnitude: self.xyz_magnitude[index],
        })
    }
}

// src/data_input/log_data.rs
