//! Manifesto Audio
//!
//! Packages raw speech audio into playable WAV files.
//!
//! # Overview
//!
//! Text-to-speech models return headerless signed 16-bit little-endian PCM.
//! This crate converts such a buffer in two steps:
//!
//! - [`pcm::decode`] - interleaved i16 bytes to normalized per-channel
//!   samples (divide by 32768)
//! - [`wav::encode`] - normalized samples to a canonical 44-byte-header WAV
//!   (clamp, then scale by 32768 for negative and 32767 for other samples)
//!
//! Both steps are pure functions over their inputs and allocate fresh
//! buffers, so they can be called from any thread.
//!
//! # Example
//!
//! ```
//! use manifesto_audio::{pcm_to_wav, PcmFormat};
//!
//! let raw: Vec<u8> = [1000i16, -1000]
//!     .iter()
//!     .flat_map(|s| s.to_le_bytes())
//!     .collect();
//!
//! let result = pcm_to_wav(&raw, PcmFormat::speech()).unwrap();
//! assert_eq!(result.wav_data.len(), 48);
//! assert_eq!(&result.wav_data[0..4], b"RIFF");
//! ```
//!
//! # Lenient input
//!
//! Decoding never rejects a byte length. Trailing bytes that do not make up a
//! whole frame are dropped. Encoding clamps out-of-range samples instead of
//! failing.

pub mod error;
pub mod frames;
pub mod pcm;
pub mod wav;

// Re-export main types at crate root
pub use error::{AudioError, AudioResult};
pub use frames::AudioFrameBuffer;
pub use pcm::{decode, PcmFormat};
pub use wav::{encode, pcm_to_wav, WavFormat, WavResult};
