//! Tests for the PCM decoder.

use pretty_assertions::assert_eq;

use crate::error::AudioError;

use super::decode::{decode, decode_with, DECODE_SCALE};
use super::format::PcmFormat;

fn pcm_bytes(samples: &[i16]) -> Vec<u8> {
    samples.iter().flat_map(|s| s.to_le_bytes()).collect()
}

// =========================================================================
// PcmFormat tests
// =========================================================================

#[test]
fn test_speech_format() {
    let format = PcmFormat::speech();
    assert_eq!(format.sample_rate, 24000);
    assert_eq!(format.channels, 1);
    assert_eq!(format, PcmFormat::default());
}

#[test]
fn test_frame_size() {
    assert_eq!(PcmFormat::mono(24000).frame_size(), 2);
    assert_eq!(PcmFormat::new(48000, 2).frame_size(), 4);
    assert_eq!(PcmFormat::new(48000, 6).frame_size(), 12);
}

#[test]
fn test_frame_count_truncates() {
    let stereo = PcmFormat::new(44100, 2);
    assert_eq!(stereo.frame_count(0), 0);
    assert_eq!(stereo.frame_count(3), 0);
    assert_eq!(stereo.frame_count(4), 1);
    assert_eq!(stereo.frame_count(11), 2);
}

#[test]
fn test_frame_count_zero_channels() {
    assert_eq!(PcmFormat::new(24000, 0).frame_count(100), 0);
}

// =========================================================================
// Decoding tests
// =========================================================================

#[test]
fn test_decode_mono_values() {
    let raw = pcm_bytes(&[1000, -1000]);
    let buffer = decode(&raw, 24000, 1).unwrap();

    assert_eq!(buffer.sample_rate(), 24000);
    assert_eq!(buffer.num_channels(), 1);
    assert_eq!(buffer.frame_count(), 2);
    assert_eq!(
        buffer.channel(0).unwrap(),
        &[1000.0 / 32768.0, -1000.0 / 32768.0][..]
    );
}

#[test]
fn test_decode_extremes() {
    let raw = pcm_bytes(&[i16::MIN, i16::MAX, 0]);
    let buffer = decode(&raw, 24000, 1).unwrap();
    let samples = buffer.channel(0).unwrap();

    assert_eq!(samples[0], -1.0);
    assert_eq!(samples[1], 32767.0 / DECODE_SCALE);
    assert!(samples[1] < 1.0);
    assert_eq!(samples[2], 0.0);
}

#[test]
fn test_decode_is_little_endian() {
    // 0x00 0x80 is i16::MIN, 0xFF 0x7F is i16::MAX
    let buffer = decode(&[0x00, 0x80, 0xFF, 0x7F], 24000, 1).unwrap();
    let samples = buffer.channel(0).unwrap();
    assert_eq!(samples[0], -1.0);
    assert_eq!(samples[1], 32767.0 / 32768.0);
}

#[test]
fn test_decode_deinterleaves_stereo() {
    let raw = pcm_bytes(&[100, -100, 200, -200]);
    let buffer = decode(&raw, 48000, 2).unwrap();

    assert_eq!(buffer.frame_count(), 2);
    assert_eq!(
        buffer.channel(0).unwrap(),
        &[100.0 / 32768.0, 200.0 / 32768.0][..]
    );
    assert_eq!(
        buffer.channel(1).unwrap(),
        &[-100.0 / 32768.0, -200.0 / 32768.0][..]
    );
}

#[test]
fn test_decode_three_channels() {
    let raw = pcm_bytes(&[1, 2, 3, 4, 5, 6]);
    let buffer = decode(&raw, 8000, 3).unwrap();

    assert_eq!(buffer.frame_count(), 2);
    for (channel, expected) in [(0, [1.0, 4.0]), (1, [2.0, 5.0]), (2, [3.0, 6.0])] {
        let decoded: Vec<f64> = buffer
            .channel(channel)
            .unwrap()
            .iter()
            .map(|s| s * DECODE_SCALE)
            .collect();
        assert_eq!(decoded, expected.to_vec(), "channel {}", channel);
    }
}

#[test]
fn test_decode_drops_partial_frames() {
    for channels in 1u16..=3 {
        let frame_count = 5;
        let frame_size = 2 * channels as usize;
        for remainder in 0..frame_size {
            let raw = vec![0x11u8; frame_count * frame_size + remainder];
            let buffer = decode(&raw, 24000, channels).unwrap();
            assert_eq!(
                buffer.frame_count(),
                frame_count,
                "channels={} remainder={}",
                channels,
                remainder
            );
            assert_eq!(buffer.num_channels(), channels);
        }
    }
}

#[test]
fn test_decode_single_odd_byte() {
    let buffer = decode(&[0x7F], 24000, 1).unwrap();
    assert_eq!(buffer.frame_count(), 0);
}

#[test]
fn test_decode_empty() {
    let buffer = decode(&[], 24000, 2).unwrap();
    assert_eq!(buffer.frame_count(), 0);
    assert_eq!(buffer.num_channels(), 2);
}

#[test]
fn test_decode_rejects_zero_sample_rate() {
    let err = decode(&[0, 0], 0, 1).unwrap_err();
    assert!(matches!(err, AudioError::InvalidSampleRate { rate: 0 }));
}

#[test]
fn test_decode_rejects_zero_channels() {
    let err = decode(&[0, 0], 24000, 0).unwrap_err();
    assert!(matches!(err, AudioError::InvalidChannelCount { count: 0 }));
}

#[test]
fn test_decode_with_format() {
    let raw = pcm_bytes(&[16384, -16384]);
    let buffer = decode_with(&raw, PcmFormat::speech()).unwrap();
    assert_eq!(buffer.sample_rate(), 24000);
    assert_eq!(buffer.channel(0).unwrap(), &[0.5, -0.5][..]);
}
