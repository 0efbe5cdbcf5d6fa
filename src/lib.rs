//! # rangeplay - Range Playback Engine
//!
//! Sample-accurate playback of a span of a sample buffer, with edge fades,
//! variable playback ratio and seamless loop rendering.
//!
//! ## Architecture
//!
//! rangeplay is an umbrella crate that coordinates:
//! - **rangeplay-core** - Sample buffers, buffer primitives, gain and ratio mappings, configuration
//! - **rangeplay-sampler** - Range resampler, fade ramps, play and loop zone rendering
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use rangeplay::prelude::*;
//!
//! let source = Arc::new(AudioBuffer::from_channels(vec![vec![0.5; 1024]]).unwrap());
//!
//! // Pull real-time blocks from a range, half an octave up
//! let mut play = PositionResampler::new(Arc::clone(&source));
//! play.set_range(128, 512);
//! play.set_fade_out(64).unwrap();
//! play.set_ratio(as_playback_ratio(0.5625)).unwrap();
//! play.reset(0);
//!
//! let mut block = AudioBuffer::new(2, 256);
//! let position = play.process(&mut block);
//! assert!(position > 256);
//!
//! // Render a one-shot with fades
//! let zone = write_play(&source, 0, 512, 16, 16).unwrap();
//! assert_eq!(zone.num_frames(), 512);
//! ```
//!
//! ## Feature Flags
//!
//! - `default` - Sampler enabled
//! - `sampler` - Range playback and zone rendering

/// Re-export of rangeplay-core for direct access
pub use rangeplay_core as core;

// Core types
pub use rangeplay_core::{
    // Mappings
    as_playback_ratio,
    gain_to_level,
    level_to_gain,
    playback_ratio_to_normalized,

    // Buffers
    AudioBuffer,

    // Error
    Error,
    // Configuration
    RenderConfig,
    Result,
    SourceFormat,
    MAX_CHANNELS,
    MAX_PLAYBACK_RATIO,
    MIN_PLAYBACK_RATIO,
};

// Sampler subsystem
#[cfg(feature = "sampler")]
pub use rangeplay_sampler as sampler;

#[cfg(feature = "sampler")]
pub use rangeplay_sampler::{
    write_loop, write_play, CatmullRom, FadeIn, FadeOut, PositionResampler, ZoneRenderer,
};

/// Convenience prelude for common imports
pub mod prelude {
    // Essential types
    pub use crate::core::{AudioBuffer, Error, RenderConfig};

    // Mappings
    pub use crate::core::{as_playback_ratio, gain_to_level, level_to_gain};

    // Sampler
    #[cfg(feature = "sampler")]
    pub use crate::sampler::{write_loop, write_play, PositionResampler, ZoneRenderer};
}
