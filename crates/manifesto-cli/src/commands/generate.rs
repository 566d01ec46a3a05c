//! Generate command implementation
//!
//! Runs the narration pipeline for a goal form: prose from the text model,
//! and optionally a spoken WAV from the speech model.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::config::{ConfigOverrides, GeminiConfig};
use crate::gemini::GeminiClient;
use crate::generator::{SpeechGenerator, TextGenerator};
use crate::input::load_form;
use crate::pipeline::{narrate, Narration};

/// Run the generate command
///
/// # Arguments
/// * `form_path` - Path to the goal form JSON
/// * `speech` - Whether to also synthesize speech
/// * `out_dir` - Directory for the WAV file (default: current directory)
/// * `text_out` - Optional file to write the prose to
/// * `overrides` - Model and voice flags
///
/// # Returns
/// Exit code: 0 on success
pub fn run(
    form_path: &str,
    speech: bool,
    out_dir: Option<&str>,
    text_out: Option<&str>,
    overrides: &ConfigOverrides,
) -> Result<ExitCode> {
    let config = GeminiConfig::from_env().with_overrides(overrides);
    let client = GeminiClient::new(config)?;
    let speech_gen = if speech {
        Some(&client as &dyn SpeechGenerator)
    } else {
        None
    };

    run_with(form_path, out_dir, text_out, &client, speech_gen)
}

/// Run generate against arbitrary generators.
pub fn run_with(
    form_path: &str,
    out_dir: Option<&str>,
    text_out: Option<&str>,
    text_gen: &dyn TextGenerator,
    speech_gen: Option<&dyn SpeechGenerator>,
) -> Result<ExitCode> {
    println!("{} {}", "Generating:".cyan().bold(), form_path);

    let loaded = load_form(Path::new(form_path))
        .with_context(|| format!("Failed to load form file: {}", form_path))?;

    let narration = narrate(&loaded.form, text_gen, speech_gen)?;

    if narration.text.trim().is_empty() {
        println!("  {} the text model returned no text", "!".yellow());
    } else {
        println!();
        println!("{}", narration.text);
        println!();
    }

    if let Some(path) = text_out {
        fs::write(path, &narration.text)
            .with_context(|| format!("Failed to write text file: {}", path))?;
        println!("{} {}", "Text:".dimmed(), path);
    }

    if let Some(wav_path) = write_audio(&narration, out_dir)? {
        println!("{} {}", "Audio:".dimmed(), wav_path.display());
    }

    println!("{}", "SUCCESS".green().bold());
    Ok(ExitCode::SUCCESS)
}

/// Writes the narration WAV, if any, returning its path.
pub fn write_audio(narration: &Narration, out_dir: Option<&str>) -> Result<Option<PathBuf>> {
    let Some(ref audio) = narration.audio else {
        return Ok(None);
    };

    let dir = Path::new(out_dir.unwrap_or("."));
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

    let path = dir.join(&narration.file_name);
    fs::write(&path, &audio.wav_data)
        .with_context(|| format!("Failed to write WAV file: {}", path.display()))?;

    println!(
        "  {} {} Hz, {} frame(s), {:.2}s, pcm {}",
        "+".green(),
        audio.sample_rate,
        audio.frame_count,
        audio.duration_seconds(),
        &audio.pcm_hash[..16]
    );
    Ok(Some(path))
}
