//! Sample-accurate playback of a sub-range of a shared source buffer.
//!
//! [`PositionResampler`] plays `source[range_start..range_start + range_length]`
//! at a variable ratio, starting from an arbitrary (possibly negative) play
//! position. Frames before the range start and after its end come out
//! silent, and an optional fade-in and fade-out shape its edges.
//!
//! ```
//! use std::sync::Arc;
//! use rangeplay_core::AudioBuffer;
//! use rangeplay_sampler::PositionResampler;
//!
//! let source = Arc::new(AudioBuffer::from_channels(vec![vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6]]).unwrap());
//! let mut play = PositionResampler::new(source);
//! play.set_range(1, 4);
//! play.reset(-1);
//!
//! let mut block = AudioBuffer::new(1, 3);
//! assert_eq!(play.process(&mut block), 2);
//! assert_eq!(block.channel(0), &[0.0, 0.2, 0.3]);
//! ```

use std::sync::Arc;

use rangeplay_core::{AudioBuffer, Error, Result, MAX_CHANNELS};
use tracing::warn;

use crate::fade::{FadeIn, FadeOut};
use crate::interpolator::CatmullRom;

/// Ratio-controlled reader over a fixed range of a source buffer.
///
/// `process` never allocates and never reads outside the source. Output
/// channels beyond the source's channel count repeat source channels
/// round-robin, so a mono source fills a stereo block.
#[derive(Debug, Clone)]
pub struct PositionResampler {
    source: Arc<AudioBuffer>,
    range_start: usize,
    range_length: usize,
    play_position: i64,
    ratio: f64,
    fade_in: FadeIn,
    fade_out: FadeOut,
    interpolators: [CatmullRom; MAX_CHANNELS],
}

impl PositionResampler {
    /// Play the whole source at ratio 1.0 from position 0, without fades.
    pub fn new(source: Arc<AudioBuffer>) -> Self {
        let range_length = source.num_frames();
        Self {
            source,
            range_start: 0,
            range_length,
            play_position: 0,
            ratio: 1.0,
            fade_in: FadeIn::new(0),
            fade_out: FadeOut::new(0),
            interpolators: std::array::from_fn(|_| CatmullRom::new()),
        }
    }

    /// Select `length` source samples from `start`.
    ///
    /// Both ends are clamped into the source, and a negative length becomes
    /// empty. Fade lengths are not revalidated.
    pub fn set_range(&mut self, start: i64, length: i64) {
        let frames = i64::try_from(self.source.num_frames()).unwrap_or(i64::MAX);
        let end = start.saturating_add(length.max(0)).clamp(0, frames);
        let start = start.clamp(0, frames);

        self.range_start = start as usize;
        self.range_length = (end - start) as usize;
    }

    /// Jump to `play_position` (0 is the range start) and restart fades and interpolation.
    pub fn reset(&mut self, play_position: i64) {
        self.play_position = play_position;
        self.fade_in.reset();
        self.fade_out.reset();
        for interp in &mut self.interpolators {
            interp.reset();
        }
    }

    /// Set the fade-in length in source samples.
    pub fn set_fade_in(&mut self, length: usize) -> Result<()> {
        self.check_fade(length, "fade-in")?;
        self.fade_in.set_length(length);
        Ok(())
    }

    /// Set the fade-out length in source samples.
    pub fn set_fade_out(&mut self, length: usize) -> Result<()> {
        self.check_fade(length, "fade-out")?;
        self.fade_out.set_length(length);
        Ok(())
    }

    /// Set source samples consumed per output sample. Takes effect on the next block.
    pub fn set_ratio(&mut self, ratio: f64) -> Result<()> {
        if !ratio.is_finite() || ratio <= 0.0 {
            warn!("Rejected playback ratio {}", ratio);
            return Err(Error::InvalidRatio(ratio));
        }
        self.ratio = ratio;
        Ok(())
    }

    /// Render the next block into `dest`, overwriting it. Returns the new play position.
    pub fn process(&mut self, dest: &mut AudioBuffer) -> i64 {
        dest.clear();

        let frames = i64::try_from(dest.num_frames()).unwrap_or(i64::MAX);
        let mut play_pos = self.play_position;
        let play_end = play_pos.saturating_add(frames);
        self.play_position = play_end;

        if play_end <= 0 {
            return self.play_position;
        }

        let mut dest_offset = 0;
        let mut dest_len = frames;
        if play_pos < 0 {
            dest_offset = -play_pos;
            dest_len = play_end;
            play_pos = 0;
        }

        let source = &*self.source;
        let src_channels = source.num_channels();
        if play_pos >= self.range_length as i64 || src_channels == 0 {
            return self.play_position;
        }

        let ratio = self.ratio;
        let read_pos = self.range_start + play_pos as usize;
        let write_start = dest_offset as usize;
        let write = write_start..write_start + dest_len as usize;
        let channels = dest.num_channels().min(MAX_CHANNELS);
        // every channel's read head moves in lockstep
        let frac = self.interpolators[0].fraction();

        let mut consumed = None;
        for (ch, interp) in self.interpolators.iter_mut().enumerate().take(channels) {
            let input = source.channel(ch % src_channels);
            let output = &mut dest.channel_mut(ch)[write.clone()];
            consumed = Some(interp.process(ratio, input, read_pos, output));
        }
        if let Some(consumed) = consumed {
            self.play_position = play_pos + consumed as i64;
        }

        let fade_in_pos = play_pos as f64 + frac - dest_offset as f64 * ratio;
        self.fade_in.process(dest, fade_in_pos, ratio);

        let fade_out_start = self.range_length as f64 - self.fade_out.len() as f64;
        self.fade_out.process(dest, fade_in_pos - fade_out_start, ratio);

        self.play_position
    }

    fn check_fade(&self, length: usize, which: &str) -> Result<()> {
        if length > self.range_length {
            warn!(
                "Ignoring {} of {} samples, range is only {} samples",
                which, length, self.range_length
            );
            return Err(Error::FadeExceedsRange {
                fade: length,
                range: self.range_length,
            });
        }
        Ok(())
    }

    /// Position of the next frame relative to the range start.
    #[inline]
    pub fn play_position(&self) -> i64 {
        self.play_position
    }

    /// First source sample of the range, after clamping.
    #[inline]
    pub fn range_start(&self) -> usize {
        self.range_start
    }

    /// Number of source samples in the range, after clamping.
    #[inline]
    pub fn range_length(&self) -> usize {
        self.range_length
    }

    /// Source samples consumed per output sample.
    #[inline]
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Fade-in length in source samples.
    #[inline]
    pub fn fade_in_length(&self) -> usize {
        self.fade_in.len()
    }

    /// Fade-out length in source samples.
    #[inline]
    pub fn fade_out_length(&self) -> usize {
        self.fade_out.len()
    }

    /// Shared source buffer this resampler reads from.
    pub fn source(&self) -> &Arc<AudioBuffer> {
        &self.source
    }
}
