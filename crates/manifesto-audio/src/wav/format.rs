//! WAV file format parameters.

/// Size of the canonical header: RIFF preamble, 16-byte `fmt ` chunk and the
/// `data` chunk preamble.
pub const HEADER_LEN: usize = 44;

/// WAV file format parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Number of channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample (always 16 for this implementation).
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Creates a 16-bit PCM format.
    pub fn new(channels: u16, sample_rate: u32) -> Self {
        Self {
            channels,
            sample_rate,
            bits_per_sample: 16,
        }
    }

    /// Creates a mono WAV format.
    pub fn mono(sample_rate: u32) -> Self {
        Self::new(1, sample_rate)
    }

    /// Creates a stereo WAV format.
    pub fn stereo(sample_rate: u32) -> Self {
        Self::new(2, sample_rate)
    }

    /// Calculates bytes per sample (per channel).
    pub fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Calculates block align (bytes per sample frame).
    ///
    /// Wraps like the 16-bit header field it is written to.
    pub fn block_align(&self) -> u16 {
        self.channels.wrapping_mul(self.bytes_per_sample())
    }

    /// Calculates byte rate (bytes per second).
    ///
    /// Wraps like the 32-bit header field it is written to.
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate
            .wrapping_mul(self.channels as u32 * self.bytes_per_sample() as u32)
    }

    /// Size of the `data` chunk payload for `frame_count` frames.
    pub fn data_len(&self, frame_count: usize) -> u64 {
        frame_count as u64 * self.channels as u64 * self.bytes_per_sample() as u64
    }

    /// Total file size for `frame_count` frames.
    pub fn file_len(&self, frame_count: usize) -> u64 {
        HEADER_LEN as u64 + self.data_len(frame_count)
    }
}
