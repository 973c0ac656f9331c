//! Engine lifecycle and block-rendering contract.

use std::sync::Arc;

use approx::assert_abs_diff_eq;

use cadenza::dsp::Error;
use cadenza::prelude::*;

use crate::helpers::{playing_player, test_engine, TEST_BLOCK_FRAMES};

#[test]
fn engine_renders_silence_when_idle() {
    let mut engine = test_engine(2);
    let mut block = vec![0.75; engine.config().block_samples()];

    engine.render_block(&mut block).unwrap();
    assert!(block.iter().all(|&s| s == 0.0));
}

#[test]
fn engine_rejects_mis_sized_blocks() {
    let mut engine = test_engine(2);
    let expected = engine.config().block_samples();

    let mut short = vec![0.5; expected - 1];
    let err = engine.render_block(&mut short).unwrap_err();
    assert!(matches!(err, Error::BlockSizeMismatch { .. }));
    // The block is untouched on the error path.
    assert!(short.iter().all(|&s| s == 0.5));
}

#[test]
fn engine_renders_a_player_through_the_master_mixer() {
    let mut engine = test_engine(2);
    let player = playing_player(TEST_BLOCK_FRAMES * 2, 0.25);
    engine.add_source(Arc::clone(&player) as Arc<dyn AudioSource>);

    let mut block = vec![0.0; engine.config().block_samples()];
    engine.render_block(&mut block).unwrap();

    // Mono source fans out into both interleaved channels.
    for s in &block {
        assert_abs_diff_eq!(*s, 0.25);
    }
    assert!(!player.is_finished());

    engine.render_block(&mut block).unwrap();
    assert!(player.is_finished());
}

#[test]
fn reconfigure_changes_the_block_contract() {
    let mut engine = test_engine(2);
    engine
        .configure(StreamConfig {
            channels: 1,
            block_frames: 64,
            sample_rate: 44_100.0,
        })
        .unwrap();

    let mut block = vec![0.0; 64];
    engine.render_block(&mut block).unwrap();

    let mut stale = vec![0.0; 2 * TEST_BLOCK_FRAMES];
    assert!(engine.render_block(&mut stale).is_err());
}

#[test]
fn invalid_configs_are_refused() {
    assert!(RenderEngine::new(StreamConfig {
        channels: 0,
        block_frames: 128,
        sample_rate: 48_000.0,
    })
    .is_err());

    let mut engine = test_engine(2);
    let bad = StreamConfig {
        channels: 2,
        block_frames: 128,
        sample_rate: 1_000.0,
    };
    assert!(engine.configure(bad).is_err());
    // The previous config survives a failed reconfigure.
    assert_eq!(engine.config().block_frames, TEST_BLOCK_FRAMES);
}

#[test]
fn sampler_note_renders_through_the_engine() {
    let mut engine = test_engine(1);

    let sample = crate::helpers::ramp_buffer(TEST_BLOCK_FRAMES);
    let sampler = Arc::new(Sampler::new(sample));
    sampler.set_native_rate(48_000.0);
    sampler.set_engine_rate(48_000.0);
    engine.add_source(Arc::clone(&sampler) as Arc<dyn AudioSource>);

    sampler.note_on(48, 1.0);
    let mut block = vec![0.0; TEST_BLOCK_FRAMES];
    engine.render_block(&mut block).unwrap();

    for (f, s) in block.iter().enumerate() {
        assert_abs_diff_eq!(*s, f as Sample);
    }
    assert!(sampler.is_finished());
}
