//! Interleaved multi-channel audio buffer.

use tracing::debug;

use crate::channel::{ChannelView, ChannelViewMut, RawChannel, RawChannelMut};
use crate::{Error, Result, Sample};

/// A container for multi-channel, interleaved audio data.
///
/// Samples are stored frame-major: all channels for frame 0, then all
/// channels for frame 1, and so on. The element for `(channel, frame)`
/// lives at `frame * channels + channel`, so the interleave stride (the
/// distance between consecutive frames of one channel) equals the channel
/// count. Dimensions are fixed at construction; `data.len()` is always
/// `channels * frames`.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    channels: usize,
    frames: usize,
    data: Vec<Sample>,
}

impl AudioBuffer {
    /// Creates a zero-filled buffer with the given dimensions.
    pub fn new(channels: usize, frames: usize) -> Self {
        debug!(channels, frames, "audio buffer allocated");
        Self {
            channels,
            frames,
            data: vec![0.0; channels * frames],
        }
    }

    /// Creates a buffer from existing interleaved sample data, converting
    /// from any numeric sample format (`i16`, `f64`, ...) to [`Sample`].
    ///
    /// `None` zero-fills the buffer; that is a policy, not an error. A
    /// source shorter than `channels * frames` fills what it covers and
    /// leaves the remainder at zero; a longer source is truncated.
    pub fn from_interleaved<T>(channels: usize, frames: usize, source: Option<&[T]>) -> Self
    where
        T: dasp_sample::Sample + dasp_sample::ToSample<Sample>,
    {
        let mut buffer = Self::new(channels, frames);
        match source {
            Some(samples) => {
                let n = samples.len().min(buffer.data.len());
                for (dst, src) in buffer.data[..n].iter_mut().zip(&samples[..n]) {
                    *dst = src.to_sample::<Sample>();
                }
            }
            None => debug!("no source data; buffer left zero-filled"),
        }
        buffer
    }

    /// Number of audio channels.
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Number of sample frames (the length of the buffer).
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Total sample count (`channels * frames`).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The raw interleaved sample storage.
    pub fn data(&self) -> &[Sample] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [Sample] {
        &mut self.data
    }

    /// Raw pointer to the interleaved storage. Valid for the lifetime of
    /// the buffer; the storage never reallocates after construction.
    pub fn as_ptr(&self) -> *const Sample {
        self.data.as_ptr()
    }

    pub fn as_mut_ptr(&mut self) -> *mut Sample {
        self.data.as_mut_ptr()
    }

    /// The increment, in samples, from frame `i` to frame `i + 1` of the
    /// same channel. Equals the channel count.
    pub fn interleave_stride(&self) -> usize {
        self.channels
    }

    #[inline]
    fn check(&self, channel: usize, frame: usize) -> Result<()> {
        if channel >= self.channels || frame >= self.frames {
            return Err(Error::SampleOutOfRange {
                channel,
                frame,
                channels: self.channels,
                frames: self.frames,
            });
        }
        Ok(())
    }

    /// Bounds-checked sample read.
    #[inline]
    pub fn at(&self, channel: usize, frame: usize) -> Result<Sample> {
        self.check(channel, frame)?;
        Ok(self.data[frame * self.channels + channel])
    }

    /// Bounds-checked mutable sample access.
    #[inline]
    pub fn at_mut(&mut self, channel: usize, frame: usize) -> Result<&mut Sample> {
        self.check(channel, frame)?;
        Ok(&mut self.data[frame * self.channels + channel])
    }

    /// Unchecked sample read for hot loops.
    ///
    /// # Safety
    ///
    /// `channel < channels()` and `frame < frames()` must both hold;
    /// anything else is undefined behavior. Only reach this through code
    /// that has already validated its loop bounds.
    #[inline]
    pub unsafe fn at_unchecked(&self, channel: usize, frame: usize) -> Sample {
        *self.data.get_unchecked(frame * self.channels + channel)
    }

    /// Unchecked mutable sample access for hot loops.
    ///
    /// # Safety
    ///
    /// Same contract as [`at_unchecked`](Self::at_unchecked).
    #[inline]
    pub unsafe fn at_unchecked_mut(&mut self, channel: usize, frame: usize) -> &mut Sample {
        let idx = frame * self.channels + channel;
        self.data.get_unchecked_mut(idx)
    }

    /// Read-only view of one channel.
    pub fn channel(&self, channel: usize) -> Result<ChannelView<'_>> {
        if channel >= self.channels {
            return Err(Error::ChannelOutOfRange {
                channel,
                channels: self.channels,
            });
        }
        Ok(ChannelView::new(self, channel))
    }

    /// Writable view of one channel.
    pub fn channel_mut(&mut self, channel: usize) -> Result<ChannelViewMut<'_>> {
        if channel >= self.channels {
            return Err(Error::ChannelOutOfRange {
                channel,
                channels: self.channels,
            });
        }
        Ok(ChannelViewMut::new(self, channel))
    }

    /// Pointer + stride descriptor of one channel.
    pub fn raw_channel(&self, channel: usize) -> Result<RawChannel> {
        Ok(self.channel(channel)?.raw())
    }

    /// Writable pointer + stride descriptor of one channel.
    pub fn raw_channel_mut(&mut self, channel: usize) -> Result<RawChannelMut> {
        Ok(self.channel_mut(channel)?.raw_mut())
    }

    /// Applies a linear gain factor to every sample, channel by channel.
    pub fn apply_gain(&mut self, gain: f64) {
        for channel in 0..self.channels {
            // In range by construction.
            ChannelViewMut::new(self, channel).apply_gain(gain);
        }
    }

    /// Sets every sample to `value`, channel by channel.
    pub fn fill(&mut self, value: Sample) {
        for channel in 0..self.channels {
            ChannelViewMut::new(self, channel).fill(value);
        }
    }

    /// Copies `min(source.len(), len())` interleaved samples positionally
    /// into storage. Excess source or destination is silently left
    /// untouched.
    pub fn copy_from_interleaved(&mut self, source: &[Sample]) {
        let n = source.len().min(self.data.len());
        self.data[..n].copy_from_slice(&source[..n]);
    }
}
