//! # Cadenza - Real-time Audio Core
//!
//! Umbrella crate over the cadenza workspace:
//! - **cadenza-core** - Sample buffers, channel views, buffer store
//! - **cadenza-dsp** - Audio sources, sampler, lock-free mixing bus,
//!   render engine
//!
//! ## Quick Start
//!
//! ```
//! use cadenza::prelude::*;
//! use std::sync::Arc;
//!
//! let config = StreamConfig {
//!     channels: 2,
//!     block_frames: 256,
//!     sample_rate: 48_000.0,
//! };
//! let mut engine = RenderEngine::new(config)?;
//!
//! // Load a sample and wire an instrument into the master mixer.
//! let mut sample = AudioBuffer::new(1, 48_000);
//! sample.fill(0.1);
//! let sampler = Arc::new(Sampler::new(Arc::new(sample)));
//! engine.add_source(Arc::clone(&sampler) as Arc<dyn AudioSource>);
//!
//! // Control plane triggers; the audio callback renders.
//! sampler.note_on(60, 1.0);
//! let mut block = vec![0.0; engine.config().block_samples()];
//! engine.render_block(&mut block)?;
//! # Ok::<(), cadenza::dsp::Error>(())
//! ```

/// Re-export of cadenza-core for direct access
pub use cadenza_core as core;

// Buffer model
pub use cadenza_core::{
    AudioBuffer, BufferKey, BufferStore, ChannelView, ChannelViewMut, RawChannel, RawChannelMut,
    Sample,
};

/// Re-export of cadenza-dsp for direct access
pub use cadenza_dsp as dsp;

// Render graph
pub use cadenza_dsp::{
    AudioSource, Mixer, RenderEngine, SamplePlayer, Sampler, SamplerVoice, StreamConfig,
};

// Lock-free primitives
pub use cadenza_dsp::{AtomicDouble, AtomicFlag, AtomicFloat};

/// Convenience prelude for common imports
pub mod prelude {
    pub use crate::core::{AudioBuffer, BufferStore, ChannelView, ChannelViewMut, Sample};
    pub use crate::dsp::{
        AudioSource, Mixer, RenderEngine, SamplePlayer, Sampler, StreamConfig,
    };
}
