//! Goal narration pipeline.
//!
//! Form to prompt, prompt to prose, prose to speech, speech to WAV.

use anyhow::{Context, Result};
use log::{debug, info, warn};
use manifesto_audio::{pcm_to_wav, WavResult};
use manifesto_goal::{download_file_name, narrative_prompt, validate_form, GoalForm};

use crate::generator::{SpeechGenerator, TextGenerator};

/// Output of one narration run.
#[derive(Debug, Clone)]
pub struct Narration {
    /// Prompt sent to the text model.
    pub prompt: String,
    /// Generated goal picture prose.
    pub text: String,
    /// Packaged speech, when speech was requested and text was produced.
    pub audio: Option<WavResult>,
    /// Suggested file name for the WAV.
    pub file_name: String,
}

/// Runs the pipeline for `form`.
///
/// # Errors
/// Fails when the form has validation errors, or when either generator or
/// WAV packaging fails. Validation warnings are logged and do not abort.
pub fn narrate(
    form: &GoalForm,
    text_gen: &dyn TextGenerator,
    speech_gen: Option<&dyn SpeechGenerator>,
) -> Result<Narration> {
    let validation = validate_form(form);
    for warning in &validation.warnings {
        warn!("{}", warning);
    }
    let details: Vec<String> = validation.errors.iter().map(|e| e.to_string()).collect();
    validation
        .into_result()
        .with_context(|| format!("invalid goal form: {}", details.join("; ")))?;

    let prompt = narrative_prompt(form);
    debug!("prompt is {} chars", prompt.chars().count());

    let text = text_gen
        .generate_text(&prompt)
        .context("Failed to generate goal picture text")?;
    info!("generated {} chars of text", text.chars().count());

    let audio = match speech_gen {
        Some(_) if text.trim().is_empty() => {
            warn!("skipping speech: no text was generated");
            None
        }
        Some(speech_gen) => {
            let speech = speech_gen
                .generate_speech(&text)
                .context("Failed to generate speech")?;
            let wav = pcm_to_wav(&speech.pcm, speech.format)
                .context("Failed to package speech as WAV")?;
            info!(
                "packaged {} frames at {} Hz ({:.2}s)",
                wav.frame_count,
                wav.sample_rate,
                wav.duration_seconds()
            );
            Some(wav)
        }
        None => None,
    };

    Ok(Narration {
        prompt,
        text,
        audio,
        file_name: download_file_name(form),
    })
}
