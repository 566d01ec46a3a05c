//! Speak command implementation
//!
//! Synthesizes speech for prose that was generated earlier.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use log::info;
use manifesto_audio::pcm_to_wav;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use crate::config::{ConfigOverrides, GeminiConfig};
use crate::gemini::GeminiClient;
use crate::generator::SpeechGenerator;
use crate::input::read_text;

/// Run the speak command
///
/// # Arguments
/// * `text_path` - Path to a UTF-8 text file
/// * `out_path` - Destination WAV path
/// * `overrides` - Model and voice flags
pub fn run(text_path: &str, out_path: &str, overrides: &ConfigOverrides) -> Result<ExitCode> {
    let config = GeminiConfig::from_env().with_overrides(overrides);
    let client = GeminiClient::new(config)?;
    run_with(text_path, out_path, &client)
}

/// Run speak against an arbitrary speech generator.
pub fn run_with(
    text_path: &str,
    out_path: &str,
    speech_gen: &dyn SpeechGenerator,
) -> Result<ExitCode> {
    println!("{} {}", "Speaking:".cyan().bold(), text_path);

    let text = read_text(Path::new(text_path))
        .with_context(|| format!("Failed to read text file: {}", text_path))?;
    if text.trim().is_empty() {
        bail!("text file is empty: {}", text_path);
    }

    let speech = speech_gen
        .generate_speech(text.trim())
        .context("Failed to generate speech")?;
    info!(
        "received {} PCM bytes at {} Hz",
        speech.pcm.len(),
        speech.format.sample_rate
    );

    let wav = pcm_to_wav(&speech.pcm, speech.format).context("Failed to package speech as WAV")?;
    fs::write(out_path, &wav.wav_data)
        .with_context(|| format!("Failed to write WAV file: {}", out_path))?;

    println!(
        "{} {} ({:.2}s, {} bytes)",
        "SUCCESS".green().bold(),
        out_path,
        wav.duration_seconds(),
        wav.wav_data.len()
    );
    Ok(ExitCode::SUCCESS)
}
