//! Planar multichannel sample buffer.
//!
//! Samples are stored channel after channel in one allocation, so a channel
//! is always a contiguous `&[f32]` and the buffer is `Send + Sync`.

use crate::error::{Error, Result};

/// A fixed-shape block of `f32` samples, `channels` by `frames`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AudioBuffer {
    channels: usize,
    frames: usize,
    samples: Vec<f32>,
}

impl AudioBuffer {
    /// Create a silent buffer.
    pub fn new(channels: usize, frames: usize) -> Self {
        Self {
            channels,
            frames,
            samples: vec![0.0; channels * frames],
        }
    }

    /// Build a buffer from one `Vec` per channel. All channels must have the same length.
    pub fn from_channels(channels: Vec<Vec<f32>>) -> Result<Self> {
        let frames = channels.first().map_or(0, Vec::len);
        if let Some(ragged) = channels.iter().position(|c| c.len() != frames) {
            return Err(Error::InvalidBuffer(format!(
                "channel {} has {} frames, expected {}",
                ragged,
                channels[ragged].len(),
                frames
            )));
        }

        Ok(Self {
            channels: channels.len(),
            frames,
            samples: channels.concat(),
        })
    }

    /// Deinterleave `data` (frame-major, `channels` samples per frame).
    pub fn from_interleaved(data: &[f32], channels: usize) -> Result<Self> {
        if channels == 0 || data.len() % channels != 0 {
            return Err(Error::InvalidBuffer(format!(
                "{} interleaved samples cannot be split into {} channels",
                data.len(),
                channels
            )));
        }

        let frames = data.len() / channels;
        let mut buffer = Self::new(channels, frames);
        for (frame, values) in data.chunks_exact(channels).enumerate() {
            for (ch, &value) in values.iter().enumerate() {
                buffer.samples[ch * frames + frame] = value;
            }
        }
        Ok(buffer)
    }

    /// Interleave into frame-major order for file writers and output devices.
    pub fn to_interleaved(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.samples.len());
        for frame in 0..self.frames {
            out.extend((0..self.channels).map(|ch| self.samples[ch * self.frames + frame]));
        }
        out
    }

    /// Number of channels.
    #[inline]
    pub fn num_channels(&self) -> usize {
        self.channels
    }

    /// Number of frames per channel.
    #[inline]
    pub fn num_frames(&self) -> usize {
        self.frames
    }

    /// True when the buffer holds no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples of one channel.
    ///
    /// # Panics
    ///
    /// Panics if `ch >= num_channels()`.
    #[inline]
    pub fn channel(&self, ch: usize) -> &[f32] {
        assert!(ch < self.channels, "channel {ch} out of range");
        &self.samples[ch * self.frames..(ch + 1) * self.frames]
    }

    /// Mutable samples of one channel.
    ///
    /// # Panics
    ///
    /// Panics if `ch >= num_channels()`.
    #[inline]
    pub fn channel_mut(&mut self, ch: usize) -> &mut [f32] {
        assert!(ch < self.channels, "channel {ch} out of range");
        &mut self.samples[ch * self.frames..(ch + 1) * self.frames]
    }

    /// Iterate over channels.
    pub fn channels(&self) -> impl Iterator<Item = &[f32]> {
        (0..self.channels).map(move |ch| self.channel(ch))
    }

    /// Iterate mutably over channels. Yields nothing for a zero-frame buffer.
    pub fn channels_mut(&mut self) -> impl Iterator<Item = &mut [f32]> {
        self.samples.chunks_exact_mut(self.frames.max(1))
    }

    /// One sample. Panics if either index is out of range.
    #[inline]
    pub fn sample(&self, ch: usize, frame: usize) -> f32 {
        self.channel(ch)[frame]
    }

    /// Overwrite one sample. Panics if either index is out of range.
    #[inline]
    pub fn set_sample(&mut self, ch: usize, frame: usize, value: f32) {
        self.channel_mut(ch)[frame] = value;
    }

    /// Zero every sample.
    pub fn clear(&mut self) {
        self.samples.fill(0.0);
    }

    /// Zero `len` frames from `start` in every channel, clipped to the buffer.
    pub fn clear_frames(&mut self, start: usize, len: usize) {
        let start = start.min(self.frames);
        let end = start.saturating_add(len).min(self.frames);
        if start == end {
            return;
        }
        for channel in self.channels_mut() {
            channel[start..end].fill(0.0);
        }
    }

    /// Overwrite frames `dest_pos..dest_pos + source.num_frames()` with `source`.
    ///
    /// Shapes must match: same channel count, and the source must fit.
    /// On mismatch nothing is written.
    pub fn copy_from(&mut self, source: &AudioBuffer, dest_pos: usize) -> Result<()> {
        self.check_placement(source, dest_pos)?;
        for ch in 0..self.channels {
            self.channel_mut(ch)[dest_pos..dest_pos + source.frames]
                .copy_from_slice(source.channel(ch));
        }
        Ok(())
    }

    /// Sum `source` into frames starting at `dest_pos`. Same shape rules as [`copy_from`](Self::copy_from).
    pub fn add_from(&mut self, source: &AudioBuffer, dest_pos: usize) -> Result<()> {
        self.check_placement(source, dest_pos)?;
        for ch in 0..self.channels {
            let dest = &mut self.channel_mut(ch)[dest_pos..dest_pos + source.frames];
            for (d, &s) in dest.iter_mut().zip(source.channel(ch)) {
                *d += s;
            }
        }
        Ok(())
    }

    /// Largest absolute sample value across all channels.
    pub fn peak(&self) -> f32 {
        self.samples.iter().fold(0.0f32, |acc, &s| acc.max(s.abs()))
    }

    fn check_placement(&self, source: &AudioBuffer, dest_pos: usize) -> Result<()> {
        let fits = dest_pos
            .checked_add(source.frames)
            .is_some_and(|end| end <= self.frames);

        if source.channels != self.channels || !fits {
            return Err(Error::BufferMismatch {
                source_channels: source.channels,
                source_frames: source.frames,
                dest_channels: self.channels,
                dest_frames: self.frames,
                dest_pos,
            });
        }
        Ok(())
    }
}
