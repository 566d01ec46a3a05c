//! Convert command implementation
//!
//! Packages a headerless 16-bit PCM file as WAV without calling any model.

use anyhow::{Context, Result};
use colored::Colorize;
use log::warn;
use manifesto_audio::{pcm_to_wav, PcmFormat};
use std::fs;
use std::process::ExitCode;

/// Run the convert command
///
/// # Arguments
/// * `input` - Raw PCM file (interleaved i16 little-endian)
/// * `out` - Destination WAV path
/// * `sample_rate` - Sample rate of the input in Hz
/// * `channels` - Channel count of the input
pub fn run(input: &str, out: &str, sample_rate: u32, channels: u16) -> Result<ExitCode> {
    println!("{} {}", "Converting:".cyan().bold(), input);

    let raw = fs::read(input).with_context(|| format!("Failed to read PCM file: {}", input))?;
    let format = PcmFormat::new(sample_rate, channels);

    let wav = pcm_to_wav(&raw, format)
        .with_context(|| format!("Failed to convert PCM file: {}", input))?;

    let dropped = raw.len() - wav.frame_count * format.frame_size();
    if dropped > 0 {
        warn!("dropped {} trailing byte(s) of a partial frame", dropped);
        println!(
            "  {} dropped {} trailing byte(s) of a partial frame",
            "!".yellow(),
            dropped
        );
    }

    fs::write(out, &wav.wav_data).with_context(|| format!("Failed to write WAV file: {}", out))?;

    println!(
        "{} {} ({} Hz, {} ch, {} frame(s), {:.2}s)",
        "SUCCESS".green().bold(),
        out,
        wav.sample_rate,
        wav.channels,
        wav.frame_count,
        wav.duration_seconds()
    );
    Ok(ExitCode::SUCCESS)
}
