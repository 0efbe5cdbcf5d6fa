//! # Render Zone
//!
//! Render a faded one-shot and a seamless loop from a generated source, and write both to WAV.
//!
//! **Concepts:** `write_play`, `write_loop`, `SourceFormat`, `to_interleaved`
//!
//! ```bash
//! cargo run --example render_zone
//! ```

use std::sync::Arc;

use hound::{SampleFormat, WavSpec, WavWriter};
use rangeplay::prelude::*;
use rangeplay::SourceFormat;

fn write_wav(path: &str, buffer: &AudioBuffer, format: &SourceFormat) -> Result<(), hound::Error> {
    let spec = WavSpec {
        channels: buffer.num_channels() as u16,
        sample_rate: format.sample_rate as u32,
        bits_per_sample: format.bits_per_sample,
        sample_format: SampleFormat::Int,
    };
    let scale = (1i64 << (format.bits_per_sample - 1)) as f32 - 1.0;

    let mut writer = WavWriter::create(path, spec)?;
    for sample in buffer.to_interleaved() {
        writer.write_sample((sample.clamp(-1.0, 1.0) * scale) as i32)?;
    }
    writer.finalize()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let format = SourceFormat {
        sample_rate: 44100.0,
        bits_per_sample: 16,
    };
    format.validate()?;

    // Two seconds of a decaying 220 Hz tone with an octave partial
    let frames = format.seconds_to_frames(2.0);
    let tone: Vec<f32> = (0..frames)
        .map(|i| {
            let t = format.frames_to_seconds(i);
            let env = (-1.5 * t).exp();
            let phase = 2.0 * std::f64::consts::PI * 220.0 * t;
            (0.5 * env * (phase.sin() + 0.3 * (2.0 * phase).sin())) as f32
        })
        .collect();
    let source = Arc::new(AudioBuffer::from_channels(vec![tone])?);

    // One-shot: 1 s from 0.25 s, 10 ms fade-in, 200 ms fade-out
    let one_shot = write_play(
        &source,
        format.seconds_to_frames(0.25),
        format.seconds_to_frames(1.0),
        format.seconds_to_frames(0.01),
        format.seconds_to_frames(0.2),
    )?;
    write_wav("/tmp/rangeplay_one_shot.wav", &one_shot, &format)?;
    println!(
        "Exported: /tmp/rangeplay_one_shot.wav ({:.2} s, peak {:.3})",
        format.frames_to_seconds(one_shot.num_frames()),
        one_shot.peak()
    );

    // Loop: 0.5 s zone with a 50 ms crossfade, written four times back to back
    let looped = write_loop(
        &source,
        format.seconds_to_frames(0.5),
        format.seconds_to_frames(0.5),
        format.seconds_to_frames(0.05),
    )?;
    let mut repeated = AudioBuffer::new(looped.num_channels(), looped.num_frames() * 4);
    for i in 0..4 {
        repeated.copy_from(&looped, i * looped.num_frames())?;
    }
    write_wav("/tmp/rangeplay_loop.wav", &repeated, &format)?;
    println!(
        "Exported: /tmp/rangeplay_loop.wav ({:.2} s per cycle)",
        format.frames_to_seconds(looped.num_frames())
    );

    Ok(())
}
