//! Core types for rangeplay: sample buffers, parameter mappings and configuration.
//!
//! ```
//! use rangeplay_core::{as_playback_ratio, AudioBuffer};
//!
//! let mut mix = AudioBuffer::new(2, 8);
//! let tail = AudioBuffer::from_channels(vec![vec![0.5; 4], vec![0.25; 4]]).unwrap();
//! mix.add_from(&tail, 4).unwrap();
//! assert_eq!(mix.peak(), 0.5);
//! assert_eq!(as_playback_ratio(0.5), 1.0);
//! ```

pub mod buffer;
pub mod config;
pub mod error;
pub mod gain;
pub mod ratio;

pub use buffer::AudioBuffer;
pub use config::{RenderConfig, SourceFormat, MAX_CHANNELS};
pub use error::{Error, Result};
pub use gain::{gain_to_level, level_to_gain};
pub use ratio::{
    as_playback_ratio, playback_ratio_to_normalized, MAX_PLAYBACK_RATIO, MIN_PLAYBACK_RATIO,
};
