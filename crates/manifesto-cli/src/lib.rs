//! Manifesto CLI library.
//!
//! This crate provides the core functionality for the `manifesto` binary:
//! input loading, Gemini configuration and client, the narration pipeline,
//! and the command implementations.

pub mod commands;
pub mod config;
pub mod gemini;
pub mod generator;
pub mod input;
pub mod pipeline;

pub use config::{ConfigOverrides, GeminiConfig};
pub use generator::{SpeechAudio, SpeechGenerator, TextGenerator};
pub use pipeline::{narrate, Narration};
