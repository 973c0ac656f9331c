//! Error types for cadenza-core.

use thiserror::Error;

/// Error type for cadenza-core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(
        "sample access out of range: accessed [ch:{channel}, fr:{frame}], \
         but size is [ch:{channels}, fr:{frames}]"
    )]
    SampleOutOfRange {
        channel: usize,
        frame: usize,
        channels: usize,
        frames: usize,
    },

    #[error("channel {channel} out of range for a {channels}-channel buffer")]
    ChannelOutOfRange { channel: usize, channels: usize },
}

/// Result type alias.
pub type Result<T> = core::result::Result<T, Error>;
