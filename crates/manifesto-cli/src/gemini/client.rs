//! Blocking client for the Gemini `generateContent` endpoint.

use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use log::{debug, info, warn};
use manifesto_goal::speech_prompt;

use super::audio::decode_inline_audio;
use super::types::{GenerateContentRequest, GenerateContentResponse, GenerationConfig};
use crate::config::{GeminiConfig, API_KEY_ENV};
use crate::generator::{SpeechAudio, SpeechGenerator, TextGenerator};

/// Gemini API client implementing both generator seams.
pub struct GeminiClient {
    config: GeminiConfig,
    api_key: String,
    http: reqwest::blocking::Client,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.config.base_url)
            .field("text_model", &self.config.text_model)
            .field("speech_model", &self.config.speech_model)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Creates a client.
    ///
    /// # Errors
    /// Fails when the config has no API key or the HTTP client cannot be
    /// built.
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let api_key = config.api_key.clone().ok_or_else(|| {
            anyhow!(
                "no Gemini API key configured (set {} or API_KEY)",
                API_KEY_ENV
            )
        })?;

        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            config,
            api_key,
            http,
        })
    }

    /// URL of `generateContent` for `model`.
    pub fn endpoint(&self, model: &str) -> String {
        endpoint_url(&self.config.base_url, model)
    }

    /// Sends one `generateContent` request.
    pub fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let url = self.endpoint(model);
        debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .with_context(|| format!("Request to {} failed", model))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            bail!("Gemini API error {}: {}", status, body.trim());
        }

        let parsed: GenerateContentResponse = response
            .json()
            .with_context(|| format!("Failed to parse response from {}", model))?;
        if let Some(reason) = parsed.finish_reason() {
            debug!("{} finished: {}", model, reason);
        }
        Ok(parsed)
    }
}

/// Joins a base URL and model name into a `generateContent` URL.
pub fn endpoint_url(base_url: &str, model: &str) -> String {
    format!(
        "{}/models/{}:generateContent",
        base_url.trim_end_matches('/'),
        model
    )
}

/// Text request for the goal picture prompt.
pub fn text_request(prompt: &str, thinking_budget: i32) -> GenerateContentRequest {
    GenerateContentRequest::user_text(prompt)
        .with_config(GenerationConfig::thinking(thinking_budget))
}

/// Speech request reading `text` aloud with `voice`.
pub fn speech_request(text: &str, voice: &str) -> GenerateContentRequest {
    GenerateContentRequest::user_text(speech_prompt(text))
        .with_config(GenerationConfig::speech(voice))
}

impl TextGenerator for GeminiClient {
    fn generate_text(&self, prompt: &str) -> Result<String> {
        info!("generating text with {}", self.config.text_model);
        let request = text_request(prompt, self.config.thinking_budget);
        let response = self.generate_content(&self.config.text_model, &request)?;

        let text = response.text();
        if text.is_empty() {
            warn!("{} returned no text", self.config.text_model);
        }
        Ok(text)
    }
}

impl SpeechGenerator for GeminiClient {
    fn generate_speech(&self, text: &str) -> Result<SpeechAudio> {
        info!(
            "generating speech with {} ({})",
            self.config.speech_model, self.config.voice
        );
        let request = speech_request(text, &self.config.voice);
        let response = self.generate_content(&self.config.speech_model, &request)?;

        let inline = response
            .inline_data()
            .ok_or_else(|| anyhow!("{} returned no audio", self.config.speech_model))?;
        debug!(
            "received {} base64 chars of {}",
            inline.data.len(),
            inline.mime_type
        );
        decode_inline_audio(inline)
    }
}
