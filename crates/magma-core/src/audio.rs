//! Audio level extraction
//!
//! The demo drives its shaders with a single bass scalar taken from the
//! analyser's byte frequency spectrum.

use crate::constants::{ANALYSER_FFT_SIZE, BASS_BIN_FRACTION};

/// Number of frequency bins produced by an analyser with the given FFT size
pub const fn frequency_bin_count(fft_size: usize) -> usize {
    fft_size / 2
}

/// Frequency bins of the default analyser
pub const DEFAULT_BIN_COUNT: usize = frequency_bin_count(ANALYSER_FFT_SIZE);

/// Number of lowest bins that count as bass for a spectrum of `bin_count` bins
pub fn bass_bin_count(bin_count: usize) -> usize {
    (bin_count as f32 * BASS_BIN_FRACTION).floor() as usize
}

/// Average magnitude of the bass bins, normalized to `0.0..=1.0`.
///
/// Returns `0.0` when the spectrum is too short to contain any bass bins.
pub fn bass_level(frequency_bins: &[u8]) -> f32 {
    let count = bass_bin_count(frequency_bins.len());
    if count == 0 {
        return 0.0;
    }
    let sum: u32 = frequency_bins[..count].iter().map(|&b| u32::from(b)).sum();
    (sum as f32 / count as f32) / 255.0
}
