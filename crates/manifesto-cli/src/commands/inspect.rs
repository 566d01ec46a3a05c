//! Inspect command implementation
//!
//! Prints the header fields, duration and PCM hash of a WAV file.

use anyhow::{Context, Result};
use colored::Colorize;
use manifesto_audio::wav::{compute_pcm_hash, read_header};
use std::fs;
use std::process::ExitCode;

use super::json_output::{error_codes, InspectOutput, InspectResult, JsonError};

/// Run the inspect command
///
/// # Arguments
/// * `input` - Path to the WAV file
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 if the file is not a canonical WAV
pub fn run(input: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(input)
    } else {
        run_human(input)
    }
}

/// Reads the file and collects its header details.
fn inspect_file(input: &str) -> Result<InspectResult> {
    let data = fs::read(input).with_context(|| format!("Failed to read WAV file: {}", input))?;
    let header = read_header(&data).with_context(|| format!("Not a canonical WAV: {}", input))?;
    Ok(InspectResult::from_header(
        &header,
        data.len(),
        compute_pcm_hash(&data),
    ))
}

/// Run inspect with human-readable (colored) output
fn run_human(input: &str) -> Result<ExitCode> {
    println!("{} {}", "Inspecting:".cyan().bold(), input);

    let result = inspect_file(input)?;

    println!("  {} {} bytes", "File:".dimmed(), result.file_len);
    println!(
        "  {} {} (RIFF {})",
        "Format:".dimmed(),
        if result.audio_format == 1 {
            "PCM".to_string()
        } else {
            format!("tag {}", result.audio_format)
        },
        result.riff_len
    );
    println!(
        "  {} {} ch, {} Hz, {} bit",
        "Layout:".dimmed(),
        result.channels,
        result.sample_rate,
        result.bits_per_sample
    );
    println!(
        "  {} byte rate {}, block align {}",
        "Rates:".dimmed(),
        result.byte_rate,
        result.block_align
    );
    println!(
        "  {} {} bytes, {} frame(s), {:.3}s",
        "Data:".dimmed(),
        result.data_len,
        result.frame_count,
        result.duration_seconds
    );
    match result.pcm_hash {
        Some(ref hash) => println!("  {} {}", "PCM hash:".dimmed(), hash),
        None => println!("  {} no data chunk found", "!".yellow()),
    }

    Ok(ExitCode::SUCCESS)
}

/// Run inspect with machine-readable JSON output
fn run_json(input: &str) -> Result<ExitCode> {
    let (output, code) = match inspect_file(input) {
        Ok(result) => (InspectOutput::success(result), ExitCode::SUCCESS),
        Err(e) => {
            let error =
                JsonError::new(error_codes::INVALID_WAV, format!("{:#}", e)).with_file(input);
            (InspectOutput::failure(vec![error]), ExitCode::from(1))
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(code)
}
