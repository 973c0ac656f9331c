//! Stream configuration.

use crate::{Error, Result};

/// Shape of the output stream a [`RenderEngine`](crate::RenderEngine)
/// renders for.
#[derive(Debug, Clone, PartialEq)]
pub struct StreamConfig {
    /// Output channels per frame.
    pub channels: usize,
    /// Frames per hardware block.
    pub block_frames: usize,
    /// Stream sample rate in Hz.
    pub sample_rate: f64,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            channels: 2,
            block_frames: 512,
            sample_rate: 48_000.0,
        }
    }
}

impl StreamConfig {
    /// Samples per block (`channels * block_frames`).
    pub fn block_samples(&self) -> usize {
        self.channels * self.block_frames
    }

    pub fn validate(&self) -> Result<()> {
        if self.channels == 0 {
            return Err(Error::InvalidConfig("channels must be non-zero".into()));
        }
        if self.block_frames == 0 {
            return Err(Error::InvalidConfig("block_frames must be non-zero".into()));
        }
        if !(8_000.0..=384_000.0).contains(&self.sample_rate) {
            return Err(Error::InvalidConfig(format!(
                "sample rate {} out of range [8000, 384000]",
                self.sample_rate
            )));
        }
        Ok(())
    }
}
