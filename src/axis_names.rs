// src/axis_names.rs

//! Centralized offset-axis naming utilities
//!
//! Provides consistent names for the three gaze offset components across
//! plot functions and the spectral pipeline.

/// Get the standard axis name for a given index
///
/// # Arguments
/// * `index` - Axis index (0=x, 1=y, 2=z)
///
/// # Panics
/// Panics if index is greater than 2
pub fn axis_name(index: usize) -> &'static str {
    match index {
        0 => "x",
        1 => "y",
        2 => "z",
        _ => panic!(
            "Invalid axis index: {}. Expected 0 (x), 1 (y), or 2 (z)",
            index
        ),
    }
}

pub const AXIS_COUNT: usize = 3;

/// Get all offset axis names as a static array
pub const AXIS_NAMES: [&str; AXIS_COUNT] = ["x", "y", "z"];
