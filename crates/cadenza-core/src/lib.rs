//! Core buffer model for the cadenza audio engine.
//!
//! - [`AudioBuffer`]: owns a rectangular grid of interleaved samples
//! - [`ChannelView`] / [`ChannelViewMut`]: zero-allocation strided views
//!   of one channel
//! - [`RawChannel`] / [`RawChannelMut`]: pointer + stride descriptors for
//!   hot render loops
//! - [`BufferStore`]: control-plane registry of shared, immutable buffers
//!
//! Everything here is synchronous and bounded; the only lock in the crate
//! guards the [`BufferStore`], which the render path never touches.

pub mod error;
pub use error::{Error, Result};

mod buffer;
pub use buffer::AudioBuffer;

mod channel;
pub use channel::{ChannelView, ChannelViewMut, RawChannel, RawChannelMut};

mod store;
pub use store::{BufferKey, BufferStore};

/// Interleaved PCM sample type.
pub type Sample = f32;
