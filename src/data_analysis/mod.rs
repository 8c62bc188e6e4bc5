// src/data_analysis/mod.rs

pub mod distribution;
pub mod fft_utils;
pub mod spectral_analysis;
pub mod spectrogram;
pub mod summary_stats;
