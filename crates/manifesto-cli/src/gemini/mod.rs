//! Gemini API client.
//!
//! Implements [`TextGenerator`](crate::generator::TextGenerator) and
//! [`SpeechGenerator`](crate::generator::SpeechGenerator) over the
//! Generative Language REST API.

mod audio;
mod client;
pub mod types;


pub use audio::{decode_inline_audio, pcm_format_from_mime};
pub use client::{endpoint_url, speech_request, text_request, GeminiClient};
