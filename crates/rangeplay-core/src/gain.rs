//! Gain to fader-level mapping.
//!
//! Each halving of gain moves the level by the same amount, which gives a
//! usable spread on a linear control. Level 1.0 is unity gain, level 0.0 is
//! -40 dB.

/// Convert linear gain to a fader level.
#[inline]
pub fn gain_to_level(gain: f32) -> f32 {
    gain.log10() * 0.5 + 1.0
}

/// Convert a fader level back to linear gain.
#[inline]
pub fn level_to_gain(level: f32) -> f32 {
    10.0f32.powf(2.0 * level - 2.0)
}
