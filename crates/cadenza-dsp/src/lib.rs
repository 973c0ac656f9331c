//! Render graph for the cadenza audio core.
//!
//! Everything that can make sound implements [`AudioSource`]:
//!
//! - [`SamplePlayer`]: plays one buffer once, start to finish
//! - [`Sampler`]: a small polyphonic instrument of resampling
//!   [`SamplerVoice`]s
//! - [`Mixer`]: a lock-free summing bus over a snapshot of child sources
//!
//! [`RenderEngine`] ties a master mixer to a pre-allocated working buffer
//! and is the entry point the device-I/O collaborator drives once per
//! hardware block.
//!
//! # Real-time discipline
//!
//! `process` never allocates, blocks, or takes a lock. The control plane
//! mutates shared state through atomic snapshot publication
//! ([`arc_swap::ArcSwap`] in the mixer) and per-field atomics in the
//! sources; the render thread only ever reads one consistent snapshot.

pub mod error;
pub use error::{Error, Result};

mod source;
pub use source::AudioSource;

mod player;
pub use player::SamplePlayer;

pub mod sampler;
pub use sampler::{Sampler, SamplerVoice};

mod mixer;
pub use mixer::Mixer;

mod config;
pub use config::StreamConfig;

mod engine;
pub use engine::RenderEngine;

pub(crate) mod lockfree;
pub use lockfree::{AtomicDouble, AtomicFlag, AtomicFloat};
