//! Frame buffer to canonical 16-bit PCM WAV.

use std::io::Write;

use crate::error::{AudioError, AudioResult};
use crate::frames::AudioFrameBuffer;

use super::format::{WavFormat, HEADER_LEN};
use super::writer::ByteWriter;

/// Scale for negative samples.
pub const NEGATIVE_SCALE: f64 = 32768.0;

/// Scale for zero and positive samples.
pub const POSITIVE_SCALE: f64 = 32767.0;

/// Converts one normalized sample to a signed 16-bit value.
///
/// The sample is clamped to `[-1.0, 1.0]`, scaled by 32768 when negative and
/// by 32767 otherwise, then truncated toward zero. NaN quantizes to 0.
///
/// The scale is asymmetric: it maps -1.0 to `i16::MIN` and 1.0 to
/// `i16::MAX`. It is lossy for positive values that went through the decoder
/// (1000 decodes to 1000/32768 and comes back as 999). `i16::MAX` is no
/// exception: it decodes to 32767/32768 and re-encodes as 32766.
pub fn quantize(sample: f64) -> i16 {
    let clamped = sample.clamp(-1.0, 1.0);
    let scaled = if clamped < 0.0 {
        clamped * NEGATIVE_SCALE
    } else {
        clamped * POSITIVE_SCALE
    };
    // `as` truncates toward zero and maps NaN to 0
    scaled as i16
}

/// Writes the 44-byte RIFF/WAVE header for a `data_len`-byte data chunk.
pub(crate) fn write_header(out: &mut ByteWriter, format: &WavFormat, data_len: u32) {
    let riff_len = data_len + (HEADER_LEN as u32 - 8);

    // RIFF header
    out.put_tag(b"RIFF").put_u32_le(riff_len).put_tag(b"WAVE");

    // fmt chunk
    out.put_tag(b"fmt ")
        .put_u32_le(16) // Chunk size (16 for PCM)
        .put_u16_le(1) // Audio format (1 = PCM)
        .put_u16_le(format.channels)
        .put_u32_le(format.sample_rate)
        .put_u32_le(format.byte_rate())
        .put_u16_le(format.block_align())
        .put_u16_le(format.bits_per_sample);

    // data chunk
    out.put_tag(b"data").put_u32_le(data_len);
}

/// Data chunk length for `frame_count` frames, if it fits the 32-bit size
/// fields.
fn checked_data_len(format: &WavFormat, frame_count: usize) -> AudioResult<u32> {
    let data_len = format.data_len(frame_count);
    if data_len > (u32::MAX - (HEADER_LEN as u32 - 8)) as u64 {
        return Err(AudioError::DataTooLarge { bytes: data_len });
    }
    Ok(data_len as u32)
}

/// The WAV format describing `buffer`.
pub fn format_of(buffer: &AudioFrameBuffer) -> WavFormat {
    WavFormat::new(buffer.num_channels(), buffer.sample_rate())
}

/// Encodes a frame buffer as a complete WAV file.
///
/// Samples are interleaved frame by frame in channel order and quantized with
/// [`quantize`]. The output is exactly `44 + frame_count * channels * 2`
/// bytes.
///
/// # Errors
/// Returns [`AudioError::DataTooLarge`] when the audio does not fit the
/// 32-bit size fields of a RIFF container.
pub fn encode(buffer: &AudioFrameBuffer) -> AudioResult<Vec<u8>> {
    let format = format_of(buffer);
    let frame_count = buffer.frame_count();
    let data_len = checked_data_len(&format, frame_count)?;

    let mut out = ByteWriter::with_capacity(HEADER_LEN + data_len as usize);
    write_header(&mut out, &format, data_len);

    let channels = buffer.channels();
    for offset in 0..frame_count {
        for channel in channels {
            out.put_i16_le(quantize(channel[offset]));
        }
    }

    debug_assert_eq!(out.position() as u64, format.file_len(frame_count));
    Ok(out.into_bytes())
}

/// Encodes a frame buffer and writes the WAV bytes to `writer`.
///
/// # Errors
/// Same as [`encode`], plus any I/O error from the writer.
pub fn encode_to<W: Write>(writer: &mut W, buffer: &AudioFrameBuffer) -> AudioResult<()> {
    let wav = encode(buffer)?;
    writer.write_all(&wav)?;
    Ok(())
}
