//! Test helpers and fixtures for cadenza integration tests.

use std::sync::Arc;

use cadenza::prelude::*;

/// Default test sample rate (matches common hardware)
pub const TEST_SAMPLE_RATE: f64 = 48_000.0;

/// Standard block size for deterministic testing
pub const TEST_BLOCK_FRAMES: usize = 256;

/// Engine with a small deterministic stream shape.
pub fn test_engine(channels: usize) -> RenderEngine {
    RenderEngine::new(StreamConfig {
        channels,
        block_frames: TEST_BLOCK_FRAMES,
        sample_rate: TEST_SAMPLE_RATE,
    })
    .expect("failed to create test engine")
}

/// A buffer where every sample holds `value`.
pub fn constant_buffer(channels: usize, frames: usize, value: Sample) -> Arc<AudioBuffer> {
    let mut buffer = AudioBuffer::new(channels, frames);
    buffer.fill(value);
    Arc::new(buffer)
}

/// A mono ramp buffer where frame `f` holds `f`.
pub fn ramp_buffer(frames: usize) -> Arc<AudioBuffer> {
    let mut buffer = AudioBuffer::new(1, frames);
    for f in 0..frames {
        *buffer.at_mut(0, f).expect("in range") = f as Sample;
    }
    Arc::new(buffer)
}

/// A playing one-shot player over a constant mono buffer.
pub fn playing_player(frames: usize, value: Sample) -> Arc<SamplePlayer> {
    let player = Arc::new(SamplePlayer::new(constant_buffer(1, frames, value)));
    player.play();
    player
}

/// Peak absolute amplitude of a signal.
pub fn peak(samples: &[Sample]) -> Sample {
    samples.iter().fold(0.0, |acc, s| acc.max(s.abs()))
}
