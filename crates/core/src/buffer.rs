//! Interleaved multichannel sample storage

/// A block of audio samples for some number of channels.
///
/// Samples are stored interleaved: sample `offset` of channel `channel` lives
/// at `offset * num_channels + channel`. The buffer knows nothing about sample
/// rate or channel layout.
///
/// Access is bounds-checked and returns `None` outside the buffer:
///
/// ```
/// use quantities_core::AudioBuffer;
///
/// let mut stereo = AudioBuffer::<f32>::new(4, 2);
/// *stereo.at_mut(3, 1).unwrap() = 0.5;
/// assert_eq!(stereo.at(3, 1), Some(&0.5));
/// assert_eq!(stereo.at(3, 2), None);
/// assert_eq!(stereo.at(4, 0), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AudioBuffer<T> {
    length: usize,
    num_channels: usize,
    samples: Vec<T>,
}

impl<T: Default + Clone> AudioBuffer<T> {
    /// A buffer of `length` samples per channel, every sample `T::default()`.
    ///
    /// # Panics
    ///
    /// Panics if `length * num_channels` samples cannot be allocated.
    #[must_use]
    pub fn new(length: usize, num_channels: usize) -> Self {
        AudioBuffer {
            length,
            num_channels,
            samples: vec![T::default(); length.saturating_mul(num_channels)],
        }
    }

    /// Change the shape of the buffer.
    ///
    /// The interleaved storage is resized in place: samples that still fit keep
    /// their storage position and new slots are `T::default()`. Changing the
    /// channel count therefore does not remap existing samples.
    ///
    /// # Panics
    ///
    /// Panics if `length * num_channels` samples cannot be allocated.
    pub fn reallocate(&mut self, length: usize, num_channels: usize) {
        tracing::trace!(
            from_length = self.length,
            from_channels = self.num_channels,
            length,
            num_channels,
            "reallocating audio buffer"
        );
        self.length = length;
        self.num_channels = num_channels;
        self.samples.resize(length.saturating_mul(num_channels), T::default());
    }
}

impl<T> AudioBuffer<T> {
    /// Sample `offset` of `channel`, or `None` if either is out of range.
    pub fn at(&self, offset: usize, channel: usize) -> Option<&T> {
        let index = self.index(offset, channel)?;
        self.samples.get(index)
    }

    /// Mutable sample `offset` of `channel`, or `None` if either is out of range.
    pub fn at_mut(&mut self, offset: usize, channel: usize) -> Option<&mut T> {
        let index = self.index(offset, channel)?;
        self.samples.get_mut(index)
    }

    /// Samples per channel.
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn num_channels(&self) -> usize {
        self.num_channels
    }

    /// The raw interleaved samples.
    pub fn samples(&self) -> &[T] {
        &self.samples
    }

    fn index(&self, offset: usize, channel: usize) -> Option<usize> {
        if offset >= self.length || channel >= self.num_channels {
            return None;
        }
        Some(offset * self.num_channels + channel)
    }
}
