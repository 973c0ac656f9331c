//! Zero-allocation views of a single channel in an interleaved buffer.
//!
//! Two access tiers: the borrow-checked views ([`ChannelView`],
//! [`ChannelViewMut`]) are the default, and the pointer + stride
//! descriptors ([`RawChannel`], [`RawChannelMut`]) are the hot-loop fast
//! path for code that has already validated its bounds.

use core::ops::{Index, IndexMut};

use crate::{AudioBuffer, Result, Sample};

/// A read-only view of one channel of an [`AudioBuffer`].
///
/// Borrows the buffer; the borrow checker guarantees the view cannot
/// outlive it. Frame `i` of the channel lives at `i * stride + channel`
/// in the underlying interleaved storage.
#[derive(Clone, Copy)]
pub struct ChannelView<'a> {
    buffer: &'a AudioBuffer,
    channel: usize,
}

impl<'a> ChannelView<'a> {
    /// Invariant: `channel < buffer.channels()`.
    pub(crate) fn new(buffer: &'a AudioBuffer, channel: usize) -> Self {
        Self { buffer, channel }
    }

    /// Number of frames visible through this view.
    pub fn len(&self) -> usize {
        self.buffer.frames()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bounds-checked sample read.
    pub fn at(&self, frame: usize) -> Result<Sample> {
        self.buffer.at(self.channel, frame)
    }

    /// Forward iterator over this channel's frames, walking the buffer at
    /// its interleave stride.
    pub fn iter(&self) -> impl Iterator<Item = &'a Sample> + 'a {
        // Stride is the channel count, which is >= 1 while a view exists.
        let stride = self.buffer.interleave_stride();
        self.buffer.data().iter().skip(self.channel).step_by(stride)
    }

    /// Unchecked (pointer, frames, stride) descriptor for hot loops.
    pub fn raw(&self) -> RawChannel {
        RawChannel {
            ptr: channel_base_ptr(self.buffer.as_ptr(), self.buffer.frames(), self.channel),
            frames: self.buffer.frames(),
            stride: self.buffer.interleave_stride(),
        }
    }
}

impl Index<usize> for ChannelView<'_> {
    type Output = Sample;

    fn index(&self, frame: usize) -> &Sample {
        assert!(
            frame < self.len(),
            "frame {frame} out of range for a {}-frame channel view",
            self.len()
        );
        &self.buffer.data()[frame * self.buffer.interleave_stride() + self.channel]
    }
}

/// A writable view of one channel of an [`AudioBuffer`].
pub struct ChannelViewMut<'a> {
    buffer: &'a mut AudioBuffer,
    channel: usize,
}

impl<'a> ChannelViewMut<'a> {
    /// Invariant: `channel < buffer.channels()`.
    pub(crate) fn new(buffer: &'a mut AudioBuffer, channel: usize) -> Self {
        Self { buffer, channel }
    }

    pub fn len(&self) -> usize {
        self.buffer.frames()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn at(&self, frame: usize) -> Result<Sample> {
        self.buffer.at(self.channel, frame)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sample> + '_ {
        let stride = self.buffer.interleave_stride();
        self.buffer.data().iter().skip(self.channel).step_by(stride)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Sample> + '_ {
        let stride = self.buffer.interleave_stride();
        let channel = self.channel;
        self.buffer
            .data_mut()
            .iter_mut()
            .skip(channel)
            .step_by(stride)
    }

    /// Applies a linear gain factor to every sample in this channel.
    pub fn apply_gain(&mut self, gain: f64) {
        let gain = gain as Sample;
        for sample in self.iter_mut() {
            *sample *= gain;
        }
    }

    /// Sets every sample in this channel to `value`.
    pub fn fill(&mut self, value: Sample) {
        for sample in self.iter_mut() {
            *sample = value;
        }
    }

    /// Copies `min(source len, view len)` samples into this channel;
    /// excess on either side is silently left untouched.
    pub fn copy_from<I>(&mut self, source: I)
    where
        I: IntoIterator<Item = Sample>,
    {
        for (dst, src) in self.iter_mut().zip(source) {
            *dst = src;
        }
    }

    /// Read-only descriptor of this channel.
    pub fn raw(&self) -> RawChannel {
        RawChannel {
            ptr: channel_base_ptr(self.buffer.as_ptr(), self.buffer.frames(), self.channel),
            frames: self.buffer.frames(),
            stride: self.buffer.interleave_stride(),
        }
    }

    /// Writable (pointer, frames, stride) descriptor for hot loops.
    pub fn raw_mut(&mut self) -> RawChannelMut {
        let frames = self.buffer.frames();
        let stride = self.buffer.interleave_stride();
        RawChannelMut {
            ptr: channel_base_ptr_mut(self.buffer.as_mut_ptr(), frames, self.channel),
            frames,
            stride,
        }
    }
}

impl Index<usize> for ChannelViewMut<'_> {
    type Output = Sample;

    fn index(&self, frame: usize) -> &Sample {
        assert!(
            frame < self.len(),
            "frame {frame} out of range for a {}-frame channel view",
            self.len()
        );
        &self.buffer.data()[frame * self.buffer.interleave_stride() + self.channel]
    }
}

impl IndexMut<usize> for ChannelViewMut<'_> {
    fn index_mut(&mut self, frame: usize) -> &mut Sample {
        assert!(
            frame < self.len(),
            "frame {frame} out of range for a {}-frame channel view",
            self.len()
        );
        let idx = frame * self.buffer.interleave_stride() + self.channel;
        &mut self.buffer.data_mut()[idx]
    }
}

// An empty buffer has no in-bounds per-channel offset; hand back the base
// pointer, which a zero-frame descriptor never dereferences.
fn channel_base_ptr(base: *const Sample, frames: usize, channel: usize) -> *const Sample {
    if frames == 0 {
        base
    } else {
        unsafe { base.add(channel) }
    }
}

fn channel_base_ptr_mut(base: *mut Sample, frames: usize, channel: usize) -> *mut Sample {
    if frames == 0 {
        base
    } else {
        unsafe { base.add(channel) }
    }
}

/// Unchecked read-only descriptor of one channel: base pointer, frame
/// count, and interleave stride.
///
/// Gathered once per render call so inner loops can read samples without
/// per-sample bounds checks or buffer indirection. Carries no borrow: the
/// caller must keep the buffer alive, and all access is `unsafe`.
#[derive(Clone, Copy, Debug)]
pub struct RawChannel {
    ptr: *const Sample,
    /// Frames addressable through this descriptor.
    pub frames: usize,
    /// Distance, in samples, between consecutive frames.
    pub stride: usize,
}

impl RawChannel {
    /// Reads the sample at `frame`.
    ///
    /// # Safety
    ///
    /// `frame < self.frames`, and the buffer this descriptor was taken
    /// from must still be alive.
    #[inline]
    pub unsafe fn get(&self, frame: usize) -> Sample {
        *self.ptr.add(frame * self.stride)
    }
}

/// Unchecked writable descriptor of one channel.
#[derive(Debug)]
pub struct RawChannelMut {
    ptr: *mut Sample,
    pub frames: usize,
    pub stride: usize,
}

impl RawChannelMut {
    /// Builds a descriptor from a base pointer already offset to the
    /// channel's first sample.
    ///
    /// # Safety
    ///
    /// `ptr` must point into interleaved storage holding at least
    /// `frames` strided samples, and no other alias may write the same
    /// slots while this descriptor is in use.
    #[inline]
    pub unsafe fn from_raw_parts(ptr: *mut Sample, frames: usize, stride: usize) -> Self {
        Self {
            ptr,
            frames,
            stride,
        }
    }

    /// Reads the sample at `frame`.
    ///
    /// # Safety
    ///
    /// `frame < self.frames`, buffer alive.
    #[inline]
    pub unsafe fn get(&self, frame: usize) -> Sample {
        *self.ptr.add(frame * self.stride)
    }

    /// Overwrites the sample at `frame`.
    ///
    /// # Safety
    ///
    /// `frame < self.frames`, buffer alive.
    #[inline]
    pub unsafe fn set(&mut self, frame: usize, value: Sample) {
        *self.ptr.add(frame * self.stride) = value;
    }

    /// Adds `value` into the sample at `frame`.
    ///
    /// # Safety
    ///
    /// `frame < self.frames`, buffer alive.
    #[inline]
    pub unsafe fn add(&mut self, frame: usize, value: Sample) {
        *self.ptr.add(frame * self.stride) += value;
    }
}

// The descriptors are plain pointer + extent bundles; sending them across
// threads is no more dangerous than the unsafe access contract they
// already carry.
unsafe impl Send for RawChannel {}
unsafe impl Send for RawChannelMut {}
