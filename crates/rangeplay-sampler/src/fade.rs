//! Linear fade ramps pinned to the edges of a playback range.
//!
//! A fade sees its window through `fade_pos`: the source-sample distance of
//! the block's first frame from the window opening (negative means the
//! window is still ahead). Positions advance by `play_ratio` per output
//! frame, so the same window covers fewer frames at higher ratios.
//!
//! A zero-length fade never attenuates but still bounds the range: a fade-in
//! silences everything before its window and a fade-out everything at or
//! after it.

use rangeplay_core::AudioBuffer;

/// Absorbs float error when a source distance is converted back to frames.
const FRAME_SLACK: f64 = 1e-9;

/// Output frames needed to advance `distance` source samples at `ratio`.
#[inline]
fn frames_for(distance: f64, ratio: f64) -> usize {
    if distance <= 0.0 {
        return 0;
    }
    // saturating float to int cast: NaN and negatives become 0
    (distance / ratio - FRAME_SLACK).ceil() as usize
}

/// Multiply `len` frames from `start` by a ramp beginning at `alpha`.
/// Returns the gain that follows the last processed frame.
fn apply_ramp(buffer: &mut AudioBuffer, start: usize, len: usize, alpha: f64, step: f64) -> f64 {
    if len == 0 {
        return alpha;
    }
    for channel in buffer.channels_mut() {
        let mut gain = alpha;
        for sample in &mut channel[start..start + len] {
            *sample *= gain.clamp(0.0, 1.0) as f32;
            gain += step;
        }
    }
    (alpha + step * len as f64).clamp(0.0, 1.0)
}

/// Ramp from silence to unity over the first `length` source samples of a range.
#[derive(Debug, Clone, PartialEq)]
pub struct FadeIn {
    length: usize,
    alpha: f64,
}

impl FadeIn {
    /// Create a fade-in of `length` source samples, starting silent.
    pub fn new(length: usize) -> Self {
        Self { length, alpha: 0.0 }
    }

    /// Restart the ramp at silence.
    pub fn reset(&mut self) {
        self.alpha = 0.0;
    }

    /// Change the window length. The current gain is kept.
    pub fn set_length(&mut self, length: usize) {
        self.length = length;
    }

    /// Window length in source samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.length
    }

    /// True for a zero-length window.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Gain the next ramped frame will receive.
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Apply the fade to `buffer` in place and return the next `fade_pos`.
    pub fn process(&mut self, buffer: &mut AudioBuffer, fade_pos: f64, play_ratio: f64) -> f64 {
        let frames = buffer.num_frames();
        let next_pos = fade_pos + play_ratio * frames as f64;
        let length = self.length as f64;

        if next_pos <= 0.0 {
            buffer.clear();
            return next_pos;
        }
        if fade_pos >= length {
            return next_pos;
        }

        let lead = frames_for(-fade_pos, play_ratio).min(frames);
        buffer.clear_frames(0, lead);

        if self.length > 0 {
            let len = frames_for(length - fade_pos.max(0.0), play_ratio).min(frames - lead);
            self.alpha = apply_ramp(buffer, lead, len, self.alpha, play_ratio / length);
        }
        next_pos
    }
}

/// Ramp from unity to silence over the last `length` source samples of a range.
#[derive(Debug, Clone, PartialEq)]
pub struct FadeOut {
    length: usize,
    alpha: f64,
}

impl FadeOut {
    /// Create a fade-out of `length` source samples, starting at unity.
    pub fn new(length: usize) -> Self {
        Self { length, alpha: 1.0 }
    }

    /// Restart the ramp at unity.
    pub fn reset(&mut self) {
        self.alpha = 1.0;
    }

    /// Change the window length. The current gain is kept.
    pub fn set_length(&mut self, length: usize) {
        self.length = length;
    }

    /// Window length in source samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.length
    }

    /// True for a zero-length window.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Gain the next ramped frame will receive.
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Apply the fade to `buffer` in place and return the next `fade_pos`.
    pub fn process(&mut self, buffer: &mut AudioBuffer, fade_pos: f64, play_ratio: f64) -> f64 {
        let frames = buffer.num_frames();
        let next_pos = fade_pos + play_ratio * frames as f64;
        let length = self.length as f64;

        if next_pos <= 0.0 {
            return next_pos;
        }
        if fade_pos >= length {
            buffer.clear();
            return next_pos;
        }

        let lead = frames_for(-fade_pos, play_ratio).min(frames);
        let len = frames_for(length - fade_pos.max(0.0), play_ratio).min(frames - lead);
        buffer.clear_frames(lead + len, frames - lead - len);

        if self.length > 0 {
            self.alpha = apply_ramp(buffer, lead, len, self.alpha, -play_ratio / length);
        }
        next_pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ones(channels: usize, frames: usize) -> AudioBuffer {
        AudioBuffer::from_channels(vec![vec![1.0; frames]; channels]).unwrap()
    }

    #[test]
    fn test_fade_in_whole_window() {
        let mut fade = FadeIn::new(4);
        let mut buffer = ones(2, 6);
        let next = fade.process(&mut buffer, 0.0, 1.0);

        assert_eq!(next, 6.0);
        for ch in buffer.channels() {
            assert_eq!(ch, &[0.0, 0.25, 0.5, 0.75, 1.0, 1.0]);
        }
        assert_eq!(fade.alpha(), 1.0);
    }

    #[test]
    fn test_fade_in_silences_ahead_of_window() {
        let mut fade = FadeIn::new(2);
        let mut buffer = ones(1, 4);
        fade.process(&mut buffer, -1.0, 1.0);
        assert_eq!(buffer.channel(0), &[0.0, 0.0, 0.5, 1.0]);

        let mut buffer = ones(1, 4);
        let mut fade = FadeIn::new(2);
        assert_eq!(fade.process(&mut buffer, -4.0, 1.0), 0.0);
        assert_eq!(buffer.peak(), 0.0);
        assert_eq!(fade.alpha(), 0.0);
    }

    #[test]
    fn test_fade_in_continues_across_blocks() {
        let mut fade = FadeIn::new(4);
        let mut pos = 0.0;
        let mut out = Vec::new();
        for _ in 0..3 {
            let mut buffer = ones(1, 2);
            pos = fade.process(&mut buffer, pos, 1.0);
            out.extend_from_slice(buffer.channel(0));
        }
        assert_eq!(out, vec![0.0, 0.25, 0.5, 0.75, 1.0, 1.0]);
    }

    #[test]
    fn test_fade_in_past_window_is_untouched() {
        let mut fade = FadeIn::new(4);
        let mut buffer = ones(1, 3);
        fade.process(&mut buffer, 4.0, 1.0);
        assert_eq!(buffer.channel(0), &[1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_zero_length_fade_in_only_bounds() {
        let mut fade = FadeIn::new(0);
        let mut buffer = ones(1, 4);
        fade.process(&mut buffer, -2.0, 1.0);
        assert_eq!(buffer.channel(0), &[0.0, 0.0, 1.0, 1.0]);

        let mut buffer = ones(1, 4);
        fade.process(&mut buffer, 0.0, 1.0);
        assert_eq!(buffer.channel(0), &[1.0; 4]);
    }

    #[test]
    fn test_fade_in_ratio_scales_window() {
        // At ratio 2 a 4-sample window takes 2 output frames.
        let mut fade = FadeIn::new(4);
        let mut buffer = ones(1, 4);
        fade.process(&mut buffer, 0.0, 2.0);
        assert_eq!(buffer.channel(0), &[0.0, 0.5, 1.0, 1.0]);
    }

    #[test]
    fn test_fade_in_fractional_ratio_stays_in_unit_range() {
        let mut fade = FadeIn::new(3);
        let mut buffer = ones(1, 8);
        fade.process(&mut buffer, 0.0, 0.7);
        let samples = buffer.channel(0);
        for pair in samples.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
        assert!(samples.iter().all(|&s| (0.0..=1.0).contains(&s)));
        assert_eq!(samples[0], 0.0);
        assert_eq!(samples[7], 1.0);
    }

    #[test]
    fn test_fade_out_whole_window() {
        let mut fade = FadeOut::new(4);
        let mut buffer = ones(2, 6);
        fade.process(&mut buffer, -2.0, 1.0);
        for ch in buffer.channels() {
            assert_eq!(ch, &[1.0, 1.0, 1.0, 0.75, 0.5, 0.25]);
        }
        assert_relative_eq!(fade.alpha(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_fade_out_clears_beyond_window() {
        let mut fade = FadeOut::new(2);
        let mut buffer = ones(1, 5);
        fade.process(&mut buffer, 0.0, 1.0);
        assert_eq!(buffer.channel(0), &[1.0, 0.5, 0.0, 0.0, 0.0]);

        let mut buffer = ones(1, 2);
        fade.process(&mut buffer, 2.0, 1.0);
        assert_eq!(buffer.peak(), 0.0);
    }

    #[test]
    fn test_fade_out_ahead_of_window_is_untouched() {
        let mut fade = FadeOut::new(2);
        let mut buffer = ones(1, 3);
        fade.process(&mut buffer, -3.0, 1.0);
        assert_eq!(buffer.channel(0), &[1.0, 1.0, 1.0]);
        assert_eq!(fade.alpha(), 1.0);
    }

    #[test]
    fn test_zero_length_fade_out_cuts_at_window() {
        let mut fade = FadeOut::new(0);
        let mut buffer = ones(1, 4);
        fade.process(&mut buffer, -1.0, 1.0);
        assert_eq!(buffer.channel(0), &[1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_reset_restores_start_gain() {
        let mut fade_in = FadeIn::new(2);
        let mut fade_out = FadeOut::new(2);
        let mut buffer = ones(1, 2);
        fade_in.process(&mut buffer, 0.0, 1.0);
        fade_out.process(&mut buffer, 0.0, 1.0);

        fade_in.reset();
        fade_out.reset();
        assert_eq!(fade_in.alpha(), 0.0);
        assert_eq!(fade_out.alpha(), 1.0);
    }

    #[test]
    fn test_empty_buffer() {
        let mut fade = FadeOut::new(2);
        let mut buffer = AudioBuffer::new(2, 0);
        assert_eq!(fade.process(&mut buffer, 0.5, 1.0), 0.5);
    }
}
