//! Reading WAV files back: header fields, data chunk and PCM hash.

use crate::error::{AudioError, AudioResult};

use super::format::HEADER_LEN;

/// Fields of a canonical 44-byte WAV header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    /// Declared RIFF chunk size (file length minus 8).
    pub riff_len: u32,
    /// Audio format tag (1 = PCM).
    pub audio_format: u16,
    /// Number of channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Declared byte rate.
    pub byte_rate: u32,
    /// Declared block align.
    pub block_align: u16,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Declared data chunk size.
    pub data_len: u32,
}

impl WavHeader {
    /// Number of frames declared by the data chunk.
    pub fn frame_count(&self) -> usize {
        match self.block_align {
            0 => 0,
            align => (self.data_len / align as u32) as usize,
        }
    }

    /// Playback duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.frame_count() as f64 / self.sample_rate as f64
    }
}

fn u16_at(bytes: &[u8], pos: usize) -> u16 {
    u16::from_le_bytes([bytes[pos], bytes[pos + 1]])
}

fn u32_at(bytes: &[u8], pos: usize) -> u32 {
    u32::from_le_bytes([bytes[pos], bytes[pos + 1], bytes[pos + 2], bytes[pos + 3]])
}

/// Parses the canonical header layout written by [`encode`](super::encode).
///
/// # Errors
/// Fails when the buffer is shorter than 44 bytes or the chunk identifiers
/// are not `RIFF`, `WAVE`, `fmt ` and `data` at their canonical offsets.
pub fn read_header(wav_data: &[u8]) -> AudioResult<WavHeader> {
    if wav_data.len() < HEADER_LEN {
        return Err(AudioError::invalid_wav(format!(
            "{} bytes is shorter than the {}-byte header",
            wav_data.len(),
            HEADER_LEN
        )));
    }

    for (pos, tag) in [(0, b"RIFF"), (8, b"WAVE"), (12, b"fmt "), (36, b"data")] {
        if &wav_data[pos..pos + 4] != tag {
            return Err(AudioError::invalid_wav(format!(
                "expected '{}' at offset {}",
                String::from_utf8_lossy(tag),
                pos
            )));
        }
    }

    Ok(WavHeader {
        riff_len: u32_at(wav_data, 4),
        audio_format: u16_at(wav_data, 20),
        channels: u16_at(wav_data, 22),
        sample_rate: u32_at(wav_data, 24),
        byte_rate: u32_at(wav_data, 28),
        block_align: u16_at(wav_data, 32),
        bits_per_sample: u16_at(wav_data, 34),
        data_len: u32_at(wav_data, 40),
    })
}

/// Extracts PCM data from a WAV file buffer.
///
/// Walks the RIFF chunk list, so files with extra chunks before `data` are
/// handled too.
///
/// # Returns
/// PCM data if found, or None if the format is invalid
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    if wav_data.len() < HEADER_LEN {
        return None;
    }

    // Verify RIFF header
    if &wav_data[0..4] != b"RIFF" || &wav_data[8..12] != b"WAVE" {
        return None;
    }

    // Find data chunk
    let mut pos = 12;
    while pos + 8 <= wav_data.len() {
        let chunk_id = &wav_data[pos..pos + 4];
        let chunk_size = u32_at(wav_data, pos + 4) as usize;

        if chunk_id == b"data" {
            let data_start = pos + 8;
            let data_end = data_start.checked_add(chunk_size)?;
            return wav_data.get(data_start..data_end);
        }

        pos = pos.checked_add(8 + chunk_size)?;
        // Align to word boundary
        if !chunk_size.is_multiple_of(2) {
            pos += 1;
        }
    }

    None
}

/// BLAKE3 hex hash of a PCM byte slice.
pub fn pcm_hash(pcm: &[u8]) -> String {
    blake3::hash(pcm).to_hex().to_string()
}

/// Computes the PCM hash of a WAV file.
///
/// # Returns
/// BLAKE3 hash of PCM data, or None if format is invalid
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(pcm_hash)
}
