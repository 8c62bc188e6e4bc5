// src/font_config.rs

// Font tuples for plot rendering, shared by every chart so text stays consistent.

use crate::constants::{
    FONT_SIZE_AXIS_LABEL, FONT_SIZE_CHART_TITLE, FONT_SIZE_LEGEND, FONT_SIZE_MAIN_TITLE,
    FONT_SIZE_MESSAGE, FONT_SIZE_PEAK_LABEL,
};

/// Proportional family resolved by plotters through the system font lookup
pub const FONT_FAMILY_SYSTEM: &str = "sans-serif";

/// Monospace family used for peak annotations so numbers line up
pub const FONT_FAMILY_MONO: &str = "monospace";

// Tuple representations for use with plotters' IntoFont trait
// (`.caption()`, `.label_style()`, `Text::new`)
pub const FONT_TUPLE_MAIN_TITLE: (&str, i32) = (FONT_FAMILY_SYSTEM, FONT_SIZE_MAIN_TITLE);
pub const FONT_TUPLE_CHART_TITLE: (&str, i32) = (FONT_FAMILY_SYSTEM, FONT_SIZE_CHART_TITLE);
pub const FONT_TUPLE_AXIS_LABEL: (&str, i32) = (FONT_FAMILY_SYSTEM, FONT_SIZE_AXIS_LABEL);
pub const FONT_TUPLE_LEGEND: (&str, i32) = (FONT_FAMILY_SYSTEM, FONT_SIZE_LEGEND);
pub const FONT_TUPLE_PEAK_LABEL: (&str, i32) = (FONT_FAMILY_MONO, FONT_SIZE_PEAK_LABEL);
pub const FONT_TUPLE_MESSAGE: (&str, i32) = (FONT_FAMILY_SYSTEM, FONT_SIZE_MESSAGE);
