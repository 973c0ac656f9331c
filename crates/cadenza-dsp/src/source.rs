//! The audio-source capability.

use cadenza_core::AudioBuffer;

/// Anything that can render audio into a buffer and report completion.
///
/// `process` mixes this source's output *into* the buffer's existing
/// contents (adding, never overwriting) for exactly `buffer.frames()`
/// frames, and must never allocate or block; a source with nothing left
/// to contribute leaves the buffer untouched.
///
/// Methods take `&self`: implementations keep their mutable state in
/// atomics so one shared handle can be triggered from the control plane
/// while the render thread processes it.
pub trait AudioSource: Send + Sync {
    /// Renders and mixes this source's output into `buffer`.
    fn process(&self, buffer: &mut AudioBuffer);

    /// True when further `process` calls would contribute no more audio.
    fn is_finished(&self) -> bool;
}
