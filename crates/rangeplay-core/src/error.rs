//! Error types for rangeplay-core.

use thiserror::Error;

/// Error type for rangeplay operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid buffer: {0}")]
    InvalidBuffer(String),

    #[error(
        "Buffer mismatch: cannot place {source_channels}x{source_frames} at frame {dest_pos} of {dest_channels}x{dest_frames}"
    )]
    BufferMismatch {
        source_channels: usize,
        source_frames: usize,
        dest_channels: usize,
        dest_frames: usize,
        dest_pos: usize,
    },

    #[error("Fade length {fade} exceeds range length {range}")]
    FadeExceedsRange { fade: usize, range: usize },

    #[error("Invalid playback ratio: {0}. Must be finite and positive")]
    InvalidRatio(f64),

    #[error("Invalid zone: {0}")]
    InvalidZone(String),
}

/// Result type for rangeplay operations.
pub type Result<T> = core::result::Result<T, Error>;
