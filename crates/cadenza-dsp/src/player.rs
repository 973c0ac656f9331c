//! One-shot playback of a shared sample buffer.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use cadenza_core::AudioBuffer;

use crate::AudioSource;

/// Plays one buffer once, start to finish, mixing its samples into the
/// output.
///
/// Stopped (initial) -> `play` -> Playing -> (`stop` or end of sample)
/// -> Stopped. Position and playing state are atomic so `play`, `stop`
/// and `set_position` work through a shared handle while the render
/// thread is processing.
pub struct SamplePlayer {
    sample: Arc<AudioBuffer>,
    position: AtomicUsize,
    playing: AtomicBool,
}

impl SamplePlayer {
    pub fn new(sample: Arc<AudioBuffer>) -> Self {
        Self {
            sample,
            position: AtomicUsize::new(0),
            playing: AtomicBool::new(false),
        }
    }

    /// Starts playback from the beginning of the sample.
    pub fn play(&self) {
        self.position.store(0, Ordering::Relaxed);
        self.playing.store(true, Ordering::Relaxed);
    }

    /// Stops playback and resets the position to the beginning.
    pub fn stop(&self) {
        self.playing.store(false, Ordering::Relaxed);
        self.position.store(0, Ordering::Relaxed);
    }

    /// Moves the read position, in frames. Usable whether stopped or
    /// playing.
    pub fn set_position(&self, frame: usize) {
        self.position.store(frame, Ordering::Relaxed);
    }

    /// Current read position, in frames.
    pub fn position(&self) -> usize {
        self.position.load(Ordering::Relaxed)
    }

    /// The shared sample this player reads from.
    pub fn sample(&self) -> &Arc<AudioBuffer> {
        &self.sample
    }
}

impl AudioSource for SamplePlayer {
    fn process(&self, buffer: &mut AudioBuffer) {
        if !self.playing.load(Ordering::Relaxed) {
            return;
        }

        let out_channels = buffer.channels();
        let src_channels = self.sample.channels();
        let src_frames = self.sample.frames();

        let mut position = self.position.load(Ordering::Relaxed);
        let mut playing = true;

        for f in 0..buffer.frames() {
            if position >= src_frames {
                playing = false;
                break;
            }

            // Indices below are validated by the loop bounds: f and c stay
            // inside the output, position inside the source.
            if src_channels == 1 {
                // Mono fan-out: one source sample into every output channel.
                let value = unsafe { self.sample.at_unchecked(0, position) };
                for c in 0..out_channels {
                    unsafe { *buffer.at_unchecked_mut(c, f) += value };
                }
            } else {
                let n = src_channels.min(out_channels);
                for c in 0..n {
                    let value = unsafe { self.sample.at_unchecked(c, position) };
                    unsafe { *buffer.at_unchecked_mut(c, f) += value };
                }
            }

            position += 1;
        }

        self.position.store(position, Ordering::Relaxed);
        if !playing {
            self.playing.store(false, Ordering::Relaxed);
        }
    }

    fn is_finished(&self) -> bool {
        !self.playing.load(Ordering::Relaxed)
    }
}
