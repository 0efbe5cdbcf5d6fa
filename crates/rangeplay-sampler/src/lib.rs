//! Sample-accurate range playback and zone rendering.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use rangeplay_core::AudioBuffer;
//! use rangeplay_sampler::{write_loop, PositionResampler};
//!
//! let source = Arc::new(AudioBuffer::from_channels(vec![vec![1.0; 64]]).unwrap());
//!
//! // Real-time: pull blocks from a range with edge fades
//! let mut play = PositionResampler::new(Arc::clone(&source));
//! play.set_range(8, 32);
//! play.set_fade_in(4).unwrap();
//! play.reset(0);
//! let mut block = AudioBuffer::new(2, 16);
//! play.process(&mut block);
//!
//! // Offline: render a seamless loop
//! let looped = write_loop(&source, 0, 48, 8).unwrap();
//! assert_eq!(looped.num_frames(), 40);
//! ```

// Building blocks
pub mod fade;
pub mod interpolator;

// Real-time playback
pub mod resampler;
pub use resampler::PositionResampler;

// Offline rendering
pub mod render;
pub use render::{write_loop, write_play, ZoneRenderer};

pub use fade::{FadeIn, FadeOut};
pub use interpolator::CatmullRom;
