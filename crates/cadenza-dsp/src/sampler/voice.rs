//! Phase-accumulator resampling voice.

use std::sync::Arc;

use smallvec::SmallVec;

use cadenza_core::{AudioBuffer, RawChannel, RawChannelMut, Sample};

use crate::lockfree::{AtomicDouble, AtomicFlag, AtomicFloat};

/// Per-render span lists stay on the stack up to this many channels.
const SPAN_STACK_CHANNELS: usize = 8;

/// One note's independent playback state within a [`Sampler`](crate::Sampler).
///
/// Resamples a shared source buffer at a pitch-shifted rate using a
/// fractional phase accumulator and linear interpolation. All voice state
/// is atomic: the control thread starts and retunes voices while the
/// render thread advances them.
pub struct SamplerVoice {
    sample: Arc<AudioBuffer>,
    src_channels: usize,
    frames: usize,
    last_index: usize,

    native_rate: AtomicDouble,
    engine_rate: AtomicDouble,

    phase: AtomicDouble,
    step: AtomicDouble,
    gain: AtomicFloat,
    active: AtomicFlag,
}

impl SamplerVoice {
    /// Binds the voice to its shared sample and initial rate pair.
    pub fn new(sample: Arc<AudioBuffer>, native_rate: f64, engine_rate: f64) -> Self {
        let src_channels = sample.channels();
        let frames = sample.frames();
        Self {
            sample,
            src_channels,
            frames,
            last_index: frames.saturating_sub(1),
            native_rate: AtomicDouble::new(native_rate),
            engine_rate: AtomicDouble::new(engine_rate),
            phase: AtomicDouble::new(0.0),
            step: AtomicDouble::new(1.0),
            gain: AtomicFloat::new(0.0),
            active: AtomicFlag::new(false),
        }
    }

    /// Updates the cached rate pair. Affects only notes started
    /// afterwards: a note in flight keeps the step computed at `start`.
    pub fn configure(&self, native_rate: f64, engine_rate: f64) {
        self.native_rate.set(native_rate);
        self.engine_rate.set(engine_rate);
    }

    /// Arms the voice for a note.
    ///
    /// Fails closed (the voice stays inactive) when the sample has fewer
    /// than two frames or either rate is non-positive. The step is the
    /// number of source frames advanced per output frame:
    /// `(native / engine) * 2^((note - root) / 12) * 2^(cents / 1200)`.
    /// Velocity maps linearly to gain, clamped to `[0, 1]`.
    pub fn start(&self, note: i32, velocity: f32, root_note: i32, tune_cents: f64) {
        let native = self.native_rate.get();
        let engine = self.engine_rate.get();
        if self.frames < 2 || native <= 0.0 || engine <= 0.0 {
            self.active.set(false);
            return;
        }

        let semis = f64::from(note - root_note);
        let pitch = (semis / 12.0).exp2() * (tune_cents / 1200.0).exp2();
        let step = (native / engine) * pitch;

        self.phase.set(0.0);
        self.step.set(step);
        self.gain.set(velocity.clamp(0.0, 1.0));
        self.active.set(step > 0.0);
    }

    /// True when the voice has nothing more to contribute.
    pub fn finished(&self) -> bool {
        !self.active.get()
    }

    /// Renders up to `frames_to_render` frames additively into `out`.
    ///
    /// Per output frame: `i = floor(phase)`; past the last valid source
    /// index the voice deactivates and stops. At the boundary frame the
    /// sample is used directly; otherwise two neighbours are blended with
    /// the fractional phase. Mono sources fan the one interpolated value
    /// out to every output channel.
    pub fn render(&self, out: &mut AudioBuffer, frames_to_render: usize) {
        if self.finished() || frames_to_render == 0 {
            return;
        }

        let out_channels = out.channels();
        if out_channels == 0 || self.src_channels == 0 {
            self.active.set(false);
            return;
        }

        let frames = frames_to_render.min(out.frames());
        if frames == 0 {
            return;
        }

        // Gather per-channel spans once for this call; the inner loop must
        // not re-derive views per sample.
        let n_copy = out_channels.min(self.src_channels);
        let src_spans: SmallVec<[RawChannel; SPAN_STACK_CHANNELS]> = (0..n_copy)
            .filter_map(|c| self.sample.channel(c).ok())
            .map(|view| view.raw())
            .collect();

        let stride = out.interleave_stride();
        let out_frames = out.frames();
        let base = out.as_mut_ptr();
        // All output spans derive from one base pointer and alias disjoint
        // strided slots of `out`.
        let mut out_spans: SmallVec<[RawChannelMut; SPAN_STACK_CHANNELS]> = (0..out_channels)
            .map(|c| unsafe { RawChannelMut::from_raw_parts(base.add(c), out_frames, stride) })
            .collect();

        let mono = self.src_channels == 1;
        let gain = self.gain.get();
        let step = self.step.get();
        let mut phase = self.phase.get();
        let mut active = true;

        for f in 0..frames {
            let i = phase as usize;
            if i > self.last_index {
                active = false;
                break;
            }
            let frac = (phase - i as f64) as Sample;

            if mono {
                let s = unsafe { self.interpolate(&src_spans[0], i, frac) };
                for span in out_spans.iter_mut() {
                    unsafe { span.add(f, gain * s) };
                }
            } else {
                for (src, dst) in src_spans.iter().zip(out_spans.iter_mut()) {
                    let s = unsafe { self.interpolate(src, i, frac) };
                    unsafe { dst.add(f, gain * s) };
                }
            }

            phase += step;
        }

        if phase >= self.last_index as f64 {
            active = false;
        }
        self.phase.set(phase);
        self.active.set(active);
    }

    /// # Safety
    ///
    /// `i <= self.last_index` and `span` must describe a channel of this
    /// voice's sample.
    #[inline]
    unsafe fn interpolate(&self, span: &RawChannel, i: usize, frac: Sample) -> Sample {
        if i == self.last_index {
            span.get(i)
        } else {
            let x0 = span.get(i);
            let x1 = span.get(i + 1);
            x0 + (x1 - x0) * frac
        }
    }
}
