//! Raw 16-bit PCM decoding.
//!
//! Speech APIs hand back headerless little-endian signed 16-bit samples,
//! interleaved across channels. This module turns such a byte stream into an
//! [`AudioFrameBuffer`](crate::AudioFrameBuffer) of normalized samples.

mod decode;
mod format;

#[cfg(test)]
mod tests;

pub use decode::{decode, decode_with, DECODE_SCALE};
pub use format::{PcmFormat, SPEECH_SAMPLE_RATE};
