//! Playback ratio bounds and the normalized speed control mapping.

/// Fastest supported playback ratio (two octaves up).
pub const MAX_PLAYBACK_RATIO: f64 = 4.0;

/// Slowest supported playback ratio (two octaves down).
pub const MIN_PLAYBACK_RATIO: f64 = 1.0 / MAX_PLAYBACK_RATIO;

/// Map a normalized control value in `[0, 1]` to a playback ratio.
///
/// The mapping is exponential: 0.0 gives [`MIN_PLAYBACK_RATIO`], 0.5 gives
/// 1.0 and 1.0 gives [`MAX_PLAYBACK_RATIO`]. Inputs outside `[0, 1]` are
/// clamped.
#[inline]
pub fn as_playback_ratio(normalized: f64) -> f64 {
    let normalized = normalized.clamp(0.0, 1.0);
    MAX_PLAYBACK_RATIO.powf((normalized - 0.5) * 2.0)
}

/// Inverse of [`as_playback_ratio`]. Ratios outside the supported bounds
/// are clamped first.
#[inline]
pub fn playback_ratio_to_normalized(ratio: f64) -> f64 {
    let ratio = ratio.clamp(MIN_PLAYBACK_RATIO, MAX_PLAYBACK_RATIO);
    ratio.ln() / MAX_PLAYBACK_RATIO.ln() * 0.5 + 0.5
}
