//! Error types for audio packaging.

use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur while decoding PCM or encoding WAV data.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Invalid sample rate.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Invalid channel count.
    #[error("invalid channel count: {count}")]
    InvalidChannelCount {
        /// The invalid channel count.
        count: usize,
    },

    /// Channels of a frame buffer disagree on their length.
    #[error("channel {channel} has {found} samples, expected {expected}")]
    ChannelLengthMismatch {
        /// Index of the offending channel.
        channel: usize,
        /// Length of channel 0.
        expected: usize,
        /// Length of the offending channel.
        found: usize,
    },

    /// The data chunk does not fit the 32-bit RIFF size fields.
    #[error("audio data too large for a WAV container: {bytes} bytes")]
    DataTooLarge {
        /// Size of the data chunk in bytes.
        bytes: u64,
    },

    /// Malformed WAV container.
    #[error("invalid WAV data: {reason}")]
    InvalidWav {
        /// What was wrong with the container.
        reason: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AudioError {
    /// Creates an invalid WAV error.
    pub fn invalid_wav(reason: impl Into<String>) -> Self {
        Self::InvalidWav {
            reason: reason.into(),
        }
    }

    /// Returns a stable code for this error kind.
    pub fn code(&self) -> &'static str {
        match self {
            AudioError::InvalidSampleRate { .. } => "AUDIO_001",
            AudioError::InvalidChannelCount { .. } => "AUDIO_002",
            AudioError::ChannelLengthMismatch { .. } => "AUDIO_003",
            AudioError::DataTooLarge { .. } => "AUDIO_004",
            AudioError::InvalidWav { .. } => "AUDIO_005",
            AudioError::Io(_) => "AUDIO_006",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_wav_helper() {
        let err = AudioError::invalid_wav("missing data chunk");
        assert!(err.to_string().contains("missing data chunk"));
        assert_eq!(err.code(), "AUDIO_005");
    }

    #[test]
    fn test_channel_mismatch_message() {
        let err = AudioError::ChannelLengthMismatch {
            channel: 1,
            expected: 4,
            found: 3,
        };
        assert_eq!(err.to_string(), "channel 1 has 3 samples, expected 4");
    }
}
