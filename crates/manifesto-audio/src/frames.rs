//! In-memory audio frames shared by the decoder and the encoder.

use crate::error::{AudioError, AudioResult};

/// Decoded audio: one sequence of normalized samples per channel.
///
/// Every channel holds the same number of samples, so a frame is the sample
/// at one index taken across all channels. Samples are nominally in
/// `[-1.0, 1.0]`; the encoder clamps anything outside that range.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioFrameBuffer {
    sample_rate: u32,
    channels: Vec<Vec<f64>>,
}

impl AudioFrameBuffer {
    /// Creates a frame buffer from per-channel sample sequences.
    ///
    /// # Errors
    /// Fails when `sample_rate` is zero, when there are no channels or more
    /// than `u16::MAX` of them, or when channel lengths differ.
    pub fn new(sample_rate: u32, channels: Vec<Vec<f64>>) -> AudioResult<Self> {
        if sample_rate == 0 {
            return Err(AudioError::InvalidSampleRate { rate: sample_rate });
        }
        if channels.is_empty() || channels.len() > u16::MAX as usize {
            return Err(AudioError::InvalidChannelCount {
                count: channels.len(),
            });
        }

        let expected = channels[0].len();
        if let Some((channel, samples)) = channels
            .iter()
            .enumerate()
            .find(|(_, samples)| samples.len() != expected)
        {
            return Err(AudioError::ChannelLengthMismatch {
                channel,
                expected,
                found: samples.len(),
            });
        }

        Ok(Self {
            sample_rate,
            channels,
        })
    }

    /// Creates a single-channel frame buffer.
    pub fn mono(sample_rate: u32, samples: Vec<f64>) -> AudioResult<Self> {
        Self::new(sample_rate, vec![samples])
    }

    /// Creates a buffer with `num_channels` channels of `frame_count` zeroed
    /// samples. Callers must have validated both parameters.
    pub(crate) fn silent(sample_rate: u32, num_channels: u16, frame_count: usize) -> Self {
        Self {
            sample_rate,
            channels: vec![vec![0.0; frame_count]; num_channels as usize],
        }
    }

    pub(crate) fn channels_mut(&mut self) -> &mut [Vec<f64>] {
        &mut self.channels
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of channels.
    pub fn num_channels(&self) -> u16 {
        // Bounded by the constructor.
        self.channels.len() as u16
    }

    /// Number of frames (samples per channel).
    pub fn frame_count(&self) -> usize {
        self.channels.first().map_or(0, Vec::len)
    }

    /// Samples of one channel, or `None` if the index is out of range.
    pub fn channel(&self, index: usize) -> Option<&[f64]> {
        self.channels.get(index).map(Vec::as_slice)
    }

    /// All channels in order.
    pub fn channels(&self) -> &[Vec<f64>] {
        &self.channels
    }

    /// Playback duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.frame_count() as f64 / self.sample_rate as f64
    }
}
