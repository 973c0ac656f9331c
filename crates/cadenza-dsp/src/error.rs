//! Error types for cadenza-dsp.

use thiserror::Error;

/// Error type for cadenza-dsp operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid stream config: {0}")]
    InvalidConfig(String),

    #[error("output block has {got} samples, but the stream config requires {expected}")]
    BlockSizeMismatch { expected: usize, got: usize },

    #[error(transparent)]
    Core(#[from] cadenza_core::Error),
}

/// Result type alias.
pub type Result<T> = core::result::Result<T, Error>;
