//! Raw PCM stream layout.

/// Sample rate of the speech collaborator's output.
pub const SPEECH_SAMPLE_RATE: u32 = 24000;

/// Layout of a headerless 16-bit PCM stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PcmFormat {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of interleaved channels.
    pub channels: u16,
}

impl PcmFormat {
    /// Bytes per 16-bit sample.
    pub const BYTES_PER_SAMPLE: usize = 2;

    /// Creates a PCM format.
    pub fn new(sample_rate: u32, channels: u16) -> Self {
        Self {
            sample_rate,
            channels,
        }
    }

    /// Mono PCM at the given rate.
    pub fn mono(sample_rate: u32) -> Self {
        Self::new(sample_rate, 1)
    }

    /// 24 kHz mono, the layout returned by text-to-speech models.
    pub fn speech() -> Self {
        Self::mono(SPEECH_SAMPLE_RATE)
    }

    /// Bytes per interleaved frame.
    pub fn frame_size(&self) -> usize {
        self.channels as usize * Self::BYTES_PER_SAMPLE
    }

    /// Number of whole frames in `byte_len` bytes. Partial frames are not
    /// counted.
    pub fn frame_count(&self, byte_len: usize) -> usize {
        match self.frame_size() {
            0 => 0,
            size => byte_len / size,
        }
    }
}

impl Default for PcmFormat {
    fn default() -> Self {
        Self::speech()
    }
}
