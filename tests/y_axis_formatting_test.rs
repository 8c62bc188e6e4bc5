// tests/y_axis_formatting_test.rs

use gaze_jsonl_render::plot_framework::{format_y_tick, tick_decimals};

#[test]
fn test_large_values_use_k_and_m_suffixes() {
    assert_eq!(format_y_tick(1500.0, "Magnitude", 5000.0), "2k");
    assert_eq!(format_y_tick(12_000.0, "Magnitude", 50_000.0), "12k");
    assert_eq!(format_y_tick(2_500_000.0, "Magnitude", 5_000_000.0), "2.5M");
}

#[test]
fn test_small_fractional_values_keep_one_decimal() {
    assert_eq!(format_y_tick(0.5, "radius", 2.0), "0.5");
    assert_eq!(format_y_tick(-2.34, "x", 10.0), "-2.3");
    assert_eq!(format_y_tick(3.0, "x", 10.0), "3");
    assert_eq!(format_y_tick(42.7, "Count", 100.0), "43");
}

#[test]
fn test_unit_scale_ticks_stay_distinct() {
    let labels: Vec<String> = [0.11, 0.12, 0.13]
        .iter()
        .map(|&y| format_y_tick(y, "x", 0.03))
        .collect();
    assert_eq!(labels, vec!["0.110", "0.120", "0.130"]);

    let labels: Vec<String> = [0.002, 0.004, 0.006]
        .iter()
        .map(|&y| format_y_tick(y, "Magnitude", 0.004))
        .collect();
    assert_eq!(labels, vec!["0.0020", "0.0040", "0.0060"]);
}

#[test]
fn test_tick_decimals_follow_span() {
    assert_eq!(tick_decimals(100.0), 0);
    assert_eq!(tick_decimals(10.0), 0);
    assert_eq!(tick_decimals(1.0), 1);
    assert_eq!(tick_decimals(0.03), 3);
    assert_eq!(tick_decimals(0.0), 1);
    assert_eq!(tick_decimals(f64::NAN), 1);
}

#[test]
fn test_db_axes_are_integer() {
    assert_eq!(format_y_tick(-123.6, "Power (dB)", 200.0), "-124");
    assert_eq!(format_y_tick(1500.0, "Power (dB)", 200.0), "1500");
}
