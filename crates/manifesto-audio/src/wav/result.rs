//! WAV packaging result type.

use crate::error::AudioResult;
use crate::frames::AudioFrameBuffer;
use crate::pcm::{decode_with, PcmFormat};

use super::encode::encode;
use super::format::HEADER_LEN;
use super::inspect::pcm_hash;

/// Result of packaging audio into a WAV file.
#[derive(Debug, Clone)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the data chunk only.
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of channels.
    pub channels: u16,
    /// Number of frames.
    pub frame_count: usize,
}

impl WavResult {
    /// Encodes a frame buffer.
    pub fn from_frames(buffer: &AudioFrameBuffer) -> AudioResult<Self> {
        let wav_data = encode(buffer)?;
        let pcm_hash = pcm_hash(&wav_data[HEADER_LEN..]);

        Ok(Self {
            wav_data,
            pcm_hash,
            sample_rate: buffer.sample_rate(),
            channels: buffer.num_channels(),
            frame_count: buffer.frame_count(),
        })
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.frame_count as f64 / self.sample_rate as f64
    }
}

/// Decodes raw PCM and re-encodes it as a WAV file.
///
/// This is the full packaging path for speech audio: raw bytes from a
/// text-to-speech model in, a playable WAV out.
///
/// # Errors
/// Fails on a zero sample rate or channel count, or audio too large for a
/// RIFF container. Trailing partial frames are dropped, not rejected.
pub fn pcm_to_wav(raw: &[u8], format: PcmFormat) -> AudioResult<WavResult> {
    let frames = decode_with(raw, format)?;
    WavResult::from_frames(&frames)
}
