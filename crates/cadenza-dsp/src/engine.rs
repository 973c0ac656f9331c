//! Render-entry boundary between the mixing graph and device I/O.

use std::sync::Arc;

use tracing::debug;

use cadenza_core::{AudioBuffer, Sample};

use crate::{AudioSource, Error, Mixer, Result, StreamConfig};

/// Owns the master [`Mixer`], the active [`StreamConfig`], and a
/// pre-allocated scratch buffer sized for one block.
///
/// The collaborator that owns the hardware callback calls
/// [`render_block`](Self::render_block) once per block with an
/// interleaved output slice. All allocation happens in `new`/`configure`;
/// the render path only zeroes, mixes, and copies.
pub struct RenderEngine {
    config: StreamConfig,
    mixer: Arc<Mixer>,
    scratch: AudioBuffer,
}

impl RenderEngine {
    pub fn new(config: StreamConfig) -> Result<Self> {
        config.validate()?;
        let scratch = AudioBuffer::new(config.channels, config.block_frames);
        debug!(
            channels = config.channels,
            block_frames = config.block_frames,
            sample_rate = config.sample_rate,
            "created render engine"
        );
        Ok(Self {
            config,
            mixer: Arc::new(Mixer::new()),
            scratch,
        })
    }

    /// Adopts a new stream shape, reallocating the scratch buffer.
    /// Control path only; never call concurrently with `render_block`.
    pub fn configure(&mut self, config: StreamConfig) -> Result<()> {
        config.validate()?;
        self.scratch = AudioBuffer::new(config.channels, config.block_frames);
        debug!(
            channels = config.channels,
            block_frames = config.block_frames,
            sample_rate = config.sample_rate,
            "reconfigured render engine"
        );
        self.config = config;
        Ok(())
    }

    pub fn config(&self) -> &StreamConfig {
        &self.config
    }

    /// The master mixer; clone the `Arc` to mutate the graph from
    /// control threads.
    pub fn mixer(&self) -> &Arc<Mixer> {
        &self.mixer
    }

    /// Attaches a source to the master mixer.
    pub fn add_source(&self, source: Arc<dyn AudioSource>) {
        self.mixer.add_source(source);
    }

    /// Renders one block into `out`, which must hold exactly
    /// `channels * block_frames` interleaved samples.
    pub fn render_block(&mut self, out: &mut [Sample]) -> Result<()> {
        let expected = self.config.block_samples();
        if out.len() != expected {
            return Err(Error::BlockSizeMismatch {
                expected,
                got: out.len(),
            });
        }

        self.scratch.fill(0.0);
        self.mixer.process(&mut self.scratch);
        out.copy_from_slice(self.scratch.data());
        Ok(())
    }
}
