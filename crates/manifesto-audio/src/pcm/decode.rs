//! Interleaved i16 little-endian bytes to normalized per-channel samples.

use crate::error::{AudioError, AudioResult};
use crate::frames::AudioFrameBuffer;

use super::format::PcmFormat;

/// Divisor applied to every decoded i16 sample.
///
/// Dividing by 32768 rather than 32767 maps `i16::MIN` to exactly -1.0 and
/// keeps positive samples strictly below 1.0. Negative samples, `i16::MIN`
/// included, survive a decode/encode round trip unchanged. Positive samples
/// may come back one step lower: `i16::MAX` returns as 32766.
pub const DECODE_SCALE: f64 = 32768.0;

/// Decodes raw PCM bytes into an [`AudioFrameBuffer`].
///
/// Bytes past the last whole frame are ignored: a stream whose length is not
/// a multiple of `num_channels * 2` decodes to the largest complete frame
/// count instead of failing.
///
/// # Arguments
/// * `raw` - Interleaved signed 16-bit little-endian samples
/// * `sample_rate` - Sample rate in Hz
/// * `num_channels` - Number of interleaved channels
///
/// # Errors
/// Only a zero sample rate or zero channel count is rejected.
pub fn decode(raw: &[u8], sample_rate: u32, num_channels: u16) -> AudioResult<AudioFrameBuffer> {
    if sample_rate == 0 {
        return Err(AudioError::InvalidSampleRate { rate: sample_rate });
    }
    if num_channels == 0 {
        return Err(AudioError::InvalidChannelCount { count: 0 });
    }

    let format = PcmFormat::new(sample_rate, num_channels);
    let frame_count = format.frame_count(raw.len());
    let mut buffer = AudioFrameBuffer::silent(sample_rate, num_channels, frame_count);

    let channels = buffer.channels_mut();
    for (i, frame) in raw
        .chunks_exact(format.frame_size())
        .take(frame_count)
        .enumerate()
    {
        for (channel, bytes) in channels.iter_mut().zip(frame.chunks_exact(2)) {
            let value = i16::from_le_bytes([bytes[0], bytes[1]]);
            channel[i] = value as f64 / DECODE_SCALE;
        }
    }

    Ok(buffer)
}

/// Decodes raw PCM bytes laid out as `format`.
pub fn decode_with(raw: &[u8], format: PcmFormat) -> AudioResult<AudioFrameBuffer> {
    decode(raw, format.sample_rate, format.channels)
}
