//! Polyphonic resampling sample instrument.

mod voice;
pub use voice::SamplerVoice;

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

use tracing::debug;

use cadenza_core::AudioBuffer;

use crate::lockfree::AtomicDouble;
use crate::AudioSource;

/// Size of the fixed voice pool.
pub const MAX_POLYPHONY: usize = 1;

/// MIDI note the sample is assumed to be recorded at.
pub const DEFAULT_ROOT_NOTE: i32 = 48;

/// Sample rate the source material was recorded at, in Hz.
pub const DEFAULT_NATIVE_RATE: f64 = 44_100.0;

/// Sample rate of the output stream, in Hz.
pub const DEFAULT_ENGINE_RATE: f64 = 48_000.0;

/// A note-triggered instrument over a fixed pool of [`SamplerVoice`]s.
///
/// `note_on` claims a finished voice, or steals voice 0 when every voice
/// is busy. Tuning parameters (root note, tune cents, rate pair) are
/// atomics; changing them affects notes started afterwards, never a note
/// already sounding.
pub struct Sampler {
    sample: Arc<AudioBuffer>,
    voices: Vec<SamplerVoice>,

    native_rate: AtomicDouble,
    engine_rate: AtomicDouble,
    root_note: AtomicI32,
    tune_cents: AtomicDouble,
}

impl Sampler {
    /// Builds a sampler over a shared sample with default tuning.
    pub fn new(sample: Arc<AudioBuffer>) -> Self {
        let voices = (0..MAX_POLYPHONY)
            .map(|_| {
                SamplerVoice::new(
                    Arc::clone(&sample),
                    DEFAULT_NATIVE_RATE,
                    DEFAULT_ENGINE_RATE,
                )
            })
            .collect();
        debug!(
            channels = sample.channels(),
            frames = sample.frames(),
            voices = MAX_POLYPHONY,
            "created sampler"
        );
        Self {
            sample,
            voices,
            native_rate: AtomicDouble::new(DEFAULT_NATIVE_RATE),
            engine_rate: AtomicDouble::new(DEFAULT_ENGINE_RATE),
            root_note: AtomicI32::new(DEFAULT_ROOT_NOTE),
            tune_cents: AtomicDouble::new(0.0),
        }
    }

    /// Triggers a note on a free voice, stealing voice 0 when the pool
    /// is exhausted.
    pub fn note_on(&self, note: i32, velocity: f32) {
        let root = self.root_note.load(Ordering::Relaxed);
        let cents = self.tune_cents.get();

        if let Some(voice) = self.voices.iter().find(|v| v.finished()) {
            voice.start(note, velocity, root, cents);
            return;
        }
        self.voices[0].start(note, velocity, root, cents);
    }

    /// Present for interface symmetry; voices play to the end of the
    /// sample regardless, so releasing a note does nothing.
    pub fn note_off(&self, _note: i32) {}

    /// The shared sample every voice reads from.
    pub fn sample(&self) -> &Arc<AudioBuffer> {
        &self.sample
    }

    pub fn root_note(&self) -> i32 {
        self.root_note.load(Ordering::Relaxed)
    }

    pub fn set_root_note(&self, note: i32) {
        self.root_note.store(note, Ordering::Relaxed);
    }

    pub fn tune_cents(&self) -> f64 {
        self.tune_cents.get()
    }

    pub fn set_tune_cents(&self, cents: f64) {
        self.tune_cents.set(cents);
    }

    pub fn native_rate(&self) -> f64 {
        self.native_rate.get()
    }

    /// Declares the rate the sample was recorded at. Takes effect on the
    /// next `note_on`.
    pub fn set_native_rate(&self, rate: f64) {
        self.native_rate.set(rate);
        self.reconfigure_voices();
    }

    pub fn engine_rate(&self) -> f64 {
        self.engine_rate.get()
    }

    /// Declares the output stream rate. Takes effect on the next
    /// `note_on`.
    pub fn set_engine_rate(&self, rate: f64) {
        self.engine_rate.set(rate);
        self.reconfigure_voices();
    }

    fn reconfigure_voices(&self) {
        let native = self.native_rate.get();
        let engine = self.engine_rate.get();
        for voice in &self.voices {
            voice.configure(native, engine);
        }
    }
}

impl AudioSource for Sampler {
    fn process(&self, buffer: &mut AudioBuffer) {
        let frames = buffer.frames();
        for voice in &self.voices {
            voice.render(buffer, frames);
        }
    }

    fn is_finished(&self) -> bool {
        self.voices.iter().all(|v| v.finished())
    }
}
