//! Render and source format configuration.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Upper bound on channels a resampler renders. Output channels beyond this stay silent.
pub const MAX_CHANNELS: usize = 8;

/// Configuration for offline zone rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Output channel count. Mono sources are duplicated across channels.
    pub channels: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { channels: 2 }
    }
}

impl RenderConfig {
    /// Set the output channel count.
    pub fn with_channels(mut self, channels: usize) -> Self {
        self.channels = channels;
        self
    }

    /// Check the channel count against [`MAX_CHANNELS`].
    pub fn validate(&self) -> Result<()> {
        if self.channels == 0 || self.channels > MAX_CHANNELS {
            return Err(Error::InvalidConfig(format!(
                "channels {} out of range (1-{})",
                self.channels, MAX_CHANNELS
            )));
        }
        Ok(())
    }
}

/// Format of a decoded source, as reported by the decoder that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceFormat {
    pub sample_rate: f64,
    pub bits_per_sample: u16,
}

impl Default for SourceFormat {
    fn default() -> Self {
        Self {
            sample_rate: 44100.0,
            bits_per_sample: 24,
        }
    }
}

impl SourceFormat {
    /// Check the sample rate and bit depth are ones a decoder can report.
    pub fn validate(&self) -> Result<()> {
        if !(8000.0..=384000.0).contains(&self.sample_rate) {
            return Err(Error::InvalidConfig(format!(
                "sample_rate {} out of range (8000-384000 Hz)",
                self.sample_rate
            )));
        }
        if !matches!(self.bits_per_sample, 8 | 16 | 24 | 32) {
            return Err(Error::InvalidConfig(format!(
                "bits_per_sample {} not one of 8, 16, 24, 32",
                self.bits_per_sample
            )));
        }
        Ok(())
    }

    /// Duration of `frames` samples in seconds.
    #[inline]
    pub fn frames_to_seconds(&self, frames: usize) -> f64 {
        frames as f64 / self.sample_rate
    }

    /// Nearest whole frame count for `seconds`. Negative durations give 0.
    #[inline]
    pub fn seconds_to_frames(&self, seconds: f64) -> usize {
        (seconds * self.sample_rate).round().max(0.0) as usize
    }
}
