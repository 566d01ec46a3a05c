//! Checks that encoder output is accepted by an independent WAV reader.

use std::io::Cursor;

use manifesto_audio::{decode, encode, pcm_to_wav, AudioFrameBuffer, PcmFormat};

fn read_back(wav: &[u8]) -> (hound::WavSpec, Vec<i16>) {
    let reader = hound::WavReader::new(Cursor::new(wav)).expect("hound should parse the WAV");
    let spec = reader.spec();
    let samples = reader
        .into_samples::<i16>()
        .collect::<Result<Vec<_>, _>>()
        .expect("samples should decode");
    (spec, samples)
}

#[test]
fn test_hound_reads_mono_speech() {
    let raw: Vec<u8> = (0..2400i32)
        .map(|i| ((i * 37) % 65536 - 32768) as i16)
        .flat_map(|s| s.to_le_bytes())
        .collect();

    let result = pcm_to_wav(&raw, PcmFormat::speech()).unwrap();
    let (spec, samples) = read_back(&result.wav_data);

    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, 24000);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(spec.sample_format, hound::SampleFormat::Int);
    assert_eq!(samples.len(), 2400);
}

#[test]
fn test_hound_reads_stereo_interleaved() {
    let buffer = AudioFrameBuffer::new(
        48000,
        vec![vec![-1.0, -0.5, 0.0], vec![1.0, 0.5, -0.25]],
    )
    .unwrap();

    let wav = encode(&buffer).unwrap();
    let (spec, samples) = read_back(&wav);

    assert_eq!(spec.channels, 2);
    assert_eq!(spec.sample_rate, 48000);
    assert_eq!(samples, vec![-32768, 32767, -16384, 16383, 0, -8192]);
}

#[test]
fn test_hound_reads_empty_file() {
    let wav = encode(&AudioFrameBuffer::mono(24000, Vec::new()).unwrap()).unwrap();
    let (spec, samples) = read_back(&wav);

    assert_eq!(wav.len(), 44);
    assert_eq!(spec.channels, 1);
    assert!(samples.is_empty());
}

#[test]
fn test_non_positive_samples_survive_round_trip() {
    let original: Vec<i16> = (-500..=0).map(|i| i * 65).collect();
    let raw: Vec<u8> = original.iter().flat_map(|s| s.to_le_bytes()).collect();

    let wav = encode(&decode(&raw, 24000, 1).unwrap()).unwrap();
    let (_, samples) = read_back(&wav);

    assert_eq!(samples, original);
}

#[test]
fn test_positive_samples_drop_at_most_one_step() {
    let original: Vec<i16> = (1..=500).map(|i| i * 65).collect();
    let raw: Vec<u8> = original.iter().flat_map(|s| s.to_le_bytes()).collect();

    let wav = encode(&decode(&raw, 24000, 1).unwrap()).unwrap();
    let (_, samples) = read_back(&wav);

    for (before, after) in original.iter().zip(&samples) {
        let diff = before - after;
        assert!((0..=1).contains(&diff), "{} became {}", before, after);
    }
}
