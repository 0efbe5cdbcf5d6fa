//! Tolerance constants for playback tests.

/// Floating point rounding errors (ratio 1.0 copies, exact fade steps).
pub const FLOAT_EPSILON: f32 = 1e-6;

/// Interpolated playback at fractional ratios.
pub const DSP_EPSILON: f32 = 1e-4;

/// Inaudible differences (~-60dB).
pub const PERCEPTUAL_EPSILON: f32 = 0.001;

/// Values below this are considered silent (~-80dB).
pub const SILENCE_THRESHOLD: f32 = 0.0001;

/// Headroom above unity that Catmull-Rom overshoot may reach on full-scale steps.
pub const OVERSHOOT_HEADROOM: f32 = 0.25;
