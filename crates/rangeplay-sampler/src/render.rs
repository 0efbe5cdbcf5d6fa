//! Offline rendering of play and loop zones.
//!
//! A zone is a span of a source buffer. `write_play` renders it once with
//! edge fades; `write_loop` renders a body whose tail is crossfaded with the
//! zone's head, so back-to-back copies of the result repeat without a click.

use std::sync::Arc;

use rangeplay_core::{AudioBuffer, Error, RenderConfig, Result};
use tracing::debug;

use crate::resampler::PositionResampler;

#[inline]
fn as_position(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Renders zones of a source into new buffers.
#[derive(Debug, Clone, Default)]
pub struct ZoneRenderer {
    config: RenderConfig,
}

impl ZoneRenderer {
    /// Create a renderer producing buffers of `config.channels` channels.
    pub fn new(config: RenderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Output configuration in use.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render `length` samples from `start` with a fade-in and fade-out.
    ///
    /// The fades together must fit inside the zone. A zone clipped by the end
    /// of the source may still be too short for one of them; that fade is
    /// skipped and the zone renders without it.
    pub fn write_play(
        &self,
        source: &Arc<AudioBuffer>,
        start: usize,
        length: usize,
        fade_in: usize,
        fade_out: usize,
    ) -> Result<AudioBuffer> {
        let fits = fade_in
            .checked_add(fade_out)
            .is_some_and(|fades| fades <= length);
        if !fits {
            return Err(Error::InvalidZone(format!(
                "fade-in {} and fade-out {} do not fit in {} samples",
                fade_in, fade_out, length
            )));
        }

        let mut play = PositionResampler::new(Arc::clone(source));
        play.set_range(as_position(start), as_position(length));
        // refused fades are logged by the setters
        let _ = play.set_fade_in(fade_in);
        let _ = play.set_fade_out(fade_out);
        play.reset(0);

        let mut output = AudioBuffer::new(self.config.channels, length);
        play.process(&mut output);

        debug!(
            "Rendered play zone: start={}, length={}, fades={}/{}",
            start, length, fade_in, fade_out
        );
        Ok(output)
    }

    /// Render a seamless loop of the zone `start..start + length`.
    ///
    /// The result is `length - crossfade` samples long: the zone minus its
    /// first `crossfade` samples, with those first samples faded in over the
    /// faded-out tail. The crossfade must fit in the zone. When the body is
    /// shorter than the crossfade, the body's fade-out is skipped and only the
    /// end of the faded-in head is mixed over it.
    pub fn write_loop(
        &self,
        source: &Arc<AudioBuffer>,
        start: usize,
        length: usize,
        crossfade: usize,
    ) -> Result<AudioBuffer> {
        if crossfade > length {
            return Err(Error::InvalidZone(format!(
                "crossfade {} longer than zone of {} samples",
                crossfade, length
            )));
        }
        let body_len = length - crossfade;
        let channels = self.config.channels;

        let mut body = PositionResampler::new(Arc::clone(source));
        body.set_range(as_position(start.saturating_add(crossfade)), as_position(body_len));
        let _ = body.set_fade_out(crossfade);
        body.reset(0);

        let mut output = AudioBuffer::new(channels, body_len);
        body.process(&mut output);

        let mut head = PositionResampler::new(Arc::clone(source));
        head.set_range(as_position(start), as_position(crossfade));
        let _ = head.set_fade_in(crossfade);
        head.reset(0);

        let mut head_block = AudioBuffer::new(channels, crossfade);
        head.process(&mut head_block);
        if crossfade <= body_len {
            output.add_from(&head_block, body_len - crossfade)?;
        } else {
            // head overhangs the body, line up their ends
            let skip = crossfade - body_len;
            for ch in 0..channels {
                let tail = &head_block.channel(ch)[skip..];
                for (out, &sample) in output.channel_mut(ch).iter_mut().zip(tail) {
                    *out += sample;
                }
            }
        }

        debug!(
            "Rendered loop zone: start={}, length={}, crossfade={}",
            start, length, crossfade
        );
        Ok(output)
    }
}

/// [`ZoneRenderer::write_play`] with the default stereo configuration.
pub fn write_play(
    source: &Arc<AudioBuffer>,
    start: usize,
    length: usize,
    fade_in: usize,
    fade_out: usize,
) -> Result<AudioBuffer> {
    ZoneRenderer::default().write_play(source, start, length, fade_in, fade_out)
}

/// [`ZoneRenderer::write_loop`] with the default stereo configuration.
pub fn write_loop(
    source: &Arc<AudioBuffer>,
    start: usize,
    length: usize,
    crossfade: usize,
) -> Result<AudioBuffer> {
    ZoneRenderer::default().write_loop(source, start, length, crossfade)
}
