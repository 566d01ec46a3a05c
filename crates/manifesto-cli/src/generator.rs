//! Seams to the remote text and speech models.

use anyhow::Result;
use manifesto_audio::PcmFormat;

/// Produces prose for a prompt.
pub trait TextGenerator {
    /// Returns the generated text. An empty string is a valid answer.
    fn generate_text(&self, prompt: &str) -> Result<String>;
}

/// Produces raw PCM speech for a piece of text.
pub trait SpeechGenerator {
    /// Returns the speech audio for `text`.
    fn generate_speech(&self, text: &str) -> Result<SpeechAudio>;
}

/// Headerless 16-bit PCM returned by a speech model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechAudio {
    /// Interleaved little-endian i16 samples.
    pub pcm: Vec<u8>,
    /// Layout of `pcm`.
    pub format: PcmFormat,
}

impl SpeechAudio {
    /// Wraps 24 kHz mono PCM.
    pub fn speech(pcm: Vec<u8>) -> Self {
        Self {
            pcm,
            format: PcmFormat::speech(),
        }
    }
}
