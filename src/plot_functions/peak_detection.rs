// src/plot_functions/peak_detection.rs

use log::info;

use crate::constants::{
    MAX_PEAKS_TO_LABEL, MIN_PEAK_SEPARATION_BINS, MIN_SECONDARY_PEAK_RATIO,
    PEAK_DETECTION_WINDOW_RADIUS,
};

/// Detects and sorts peaks in spectrum data for labeling.
/// Returns up to `MAX_PEAKS_TO_LABEL` (frequency, amplitude) tuples, largest first.
///
/// The DC bin is never a candidate. A bin is a peak when it is >= every
/// neighbour on its left and > every neighbour on its right within
/// `PEAK_DETECTION_WINDOW_RADIUS` (rightmost point of a plateau wins).
/// Secondary peaks must reach `MIN_SECONDARY_PEAK_RATIO` of the primary and
/// sit at least `MIN_PEAK_SEPARATION_BINS` bins from every accepted peak.
pub fn find_and_sort_peaks(series_data: &[(f64, f64)], label: &str) -> Vec<(f64, f64)> {
    let mut candidates: Vec<(usize, f64, f64)> = Vec::new();

    if series_data.len() > 2 {
        // Iterate from the second point to the second-to-last point,
        // as peak detection logic needs at least one point on each side.
        for j in 1..(series_data.len() - 1) {
            let (freq, amp) = series_data[j];
            if !amp.is_finite() || amp <= 0.0 {
                continue;
            }
            let w = PEAK_DETECTION_WINDOW_RADIUS.min(j).min(series_data.len() - 1 - j);
            let ge_left = (1..=w).all(|k| amp >= series_data[j - k].1);
            let gt_right = ge_left && (1..=w).all(|k| amp > series_data[j + k].1);
            if ge_left && gt_right {
                candidates.push((j, freq, amp));
            }
        }
    }

    candidates.sort_by(|a, b| b.2.total_cmp(&a.2));

    let mut accepted: Vec<(usize, f64, f64)> = Vec::new();
    for (idx, freq, amp) in candidates {
        if accepted.len() >= MAX_PEAKS_TO_LABEL {
            break;
        }
        if let Some(&(_, _, primary_amp)) = accepted.first() {
            if amp < primary_amp * MIN_SECONDARY_PEAK_RATIO {
                break; // Sorted descending, nothing further qualifies
            }
        }
        let too_close = accepted
            .iter()
            .any(|(p_idx, _, _)| p_idx.abs_diff(idx) < MIN_PEAK_SEPARATION_BINS);
        if !too_close {
            accepted.push((idx, freq, amp));
        }
    }

    let peaks: Vec<(f64, f64)> = accepted.into_iter().map(|(_, f, a)| (f, a)).collect();
    if let Some(&(main_freq, main_amp)) = peaks.first() {
        info!("  {label} Spectrum: Primary Peak magnitude {main_amp:.3} at {main_freq:.3} Hz");
        for (idx, (freq, amp)) in peaks.iter().skip(1).enumerate() {
            info!("    Subordinate Peak {}: {:.3} at {:.3} Hz", idx + 1, amp, freq);
        }
    } else {
        info!("  {label} Spectrum: No significant peaks found.");
    }
    peaks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(amps: &[f64]) -> Vec<(f64, f64)> {
        amps.iter().enumerate().map(|(i, &a)| (i as f64 * 0.5, a)).collect()
    }

    #[test]
    fn test_primary_and_secondary_peaks() {
        let data = series(&[9.0, 1.0, 2.0, 8.0, 2.0, 1.0, 0.5, 1.0, 5.0, 1.0, 0.2, 0.1]);
        let peaks = find_and_sort_peaks(&data, "test");
        assert_eq!(peaks, vec![(1.5, 8.0), (4.0, 5.0)]);
    }

    #[test]
    fn test_weak_peaks_are_dropped() {
        let data = series(&[0.0, 1.0, 10.0, 1.0, 0.0, 0.0, 2.0, 0.0, 0.0]);
        let peaks = find_and_sort_peaks(&data, "test");
        assert_eq!(peaks, vec![(1.0, 10.0)]);
    }

    #[test]
    fn test_flat_or_tiny_series_has_no_peaks() {
        assert!(find_and_sort_peaks(&series(&[0.0; 10]), "flat").is_empty());
        assert!(find_and_sort_peaks(&series(&[1.0, 2.0]), "tiny").is_empty());
    }
}

// src/plot_functions/peak_detection.rs
