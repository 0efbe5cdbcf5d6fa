//! Test helpers and fixtures for rangeplay integration tests
//!
//! ## Tolerance Levels
//!
//! Use the appropriate tolerance from [`tolerances`] module:
//! - `FLOAT_EPSILON` (1e-6): Exact operations (ratio 1.0 copy, fade steps)
//! - `DSP_EPSILON` (1e-4): Interpolated playback
//! - `PERCEPTUAL_EPSILON` (0.001): Perceptual equivalence (-60dB)
//! - `SILENCE_THRESHOLD` (0.0001): Silence detection (-80dB)

#![allow(dead_code)]

pub mod tolerances;

use std::sync::Arc;

use rangeplay::prelude::*;

/// Default test sample rate
pub const TEST_SAMPLE_RATE: f64 = 48000.0;

/// Standard block size for deterministic testing
pub const TEST_BLOCK_SIZE: usize = 64;

/// Generate a sine wave at given frequency for specified samples.
pub fn generate_sine(frequency: f64, sample_rate: f64, num_samples: usize) -> Vec<f32> {
    (0..num_samples)
        .map(|i| {
            let t = i as f64 / sample_rate;
            (2.0 * std::f64::consts::PI * frequency * t).sin() as f32
        })
        .collect()
}

/// Generate an integer staircase [0, 1, 2, ..., n-1] for exact position checks.
pub fn generate_integer_staircase(num_samples: usize) -> Vec<f32> {
    (0..num_samples).map(|i| i as f32).collect()
}

/// Generate a DC signal (constant value).
pub fn generate_dc(value: f32, num_samples: usize) -> Vec<f32> {
    vec![value; num_samples]
}

/// Generate reproducible noise in -1..1.
pub fn generate_noise(num_samples: usize, seed: u64) -> Vec<f32> {
    let mut rng = seed;
    (0..num_samples)
        .map(|_| {
            rng = rng.wrapping_mul(6364136223846793005).wrapping_add(1);
            ((rng >> 33) as f32 / u32::MAX as f32) * 2.0 - 1.0
        })
        .collect()
}

/// Wrap mono samples as a shareable source.
pub fn mono_source(samples: Vec<f32>) -> Arc<AudioBuffer> {
    Arc::new(AudioBuffer::from_channels(vec![samples]).expect("mono source"))
}

/// Wrap left/right samples as a shareable source.
pub fn stereo_source(left: Vec<f32>, right: Vec<f32>) -> Arc<AudioBuffer> {
    Arc::new(AudioBuffer::from_channels(vec![left, right]).expect("stereo source"))
}

/// Pull `total` frames from `play` in blocks of `block` frames and return channel 0.
pub fn render_blocks(play: &mut PositionResampler, total: usize, block: usize) -> Vec<f32> {
    let mut out = Vec::with_capacity(total);
    let mut dest = AudioBuffer::new(1, block);
    while out.len() < total {
        play.process(&mut dest);
        out.extend_from_slice(dest.channel(0));
    }
    out.truncate(total);
    out
}

/// Calculate RMS of a signal.
pub fn rms(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum_sq: f32 = samples.iter().map(|s| s * s).sum();
    (sum_sq / samples.len() as f32).sqrt()
}

/// Calculate peak amplitude of a signal.
pub fn peak(samples: &[f32]) -> f32 {
    samples
        .iter()
        .map(|s| s.abs())
        .fold(0.0_f32, |a, b| a.max(b))
}

/// Assert that a signal is approximately silent (all values near zero).
pub fn assert_silence(samples: &[f32], tolerance: f32) {
    let max = peak(samples);
    assert!(
        max <= tolerance,
        "Expected silence, but peak amplitude was {}",
        max
    );
}

/// Compare two signals sample by sample, reporting the first mismatch.
pub fn assert_signals_match(actual: &[f32], expected: &[f32], tolerance: f32) {
    assert_eq!(actual.len(), expected.len(), "Signal lengths differ");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            (a - e).abs() <= tolerance,
            "Mismatch at sample {}: got {}, expected {} (tolerance {})",
            i,
            a,
            e,
            tolerance
        );
    }
}
