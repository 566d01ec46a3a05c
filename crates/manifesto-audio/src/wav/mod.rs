//! Canonical WAV encoder.
//!
//! This module writes 16-bit PCM WAV files with a single `fmt ` chunk and a
//! single `data` chunk, and no timestamps or variable metadata. The same
//! frames always produce the same bytes.

mod encode;
mod format;
mod inspect;
mod result;
mod writer;


// Re-export public API
pub use encode::{encode, encode_to, format_of, quantize, NEGATIVE_SCALE, POSITIVE_SCALE};
pub use format::{WavFormat, HEADER_LEN};
pub use inspect::{compute_pcm_hash, extract_pcm_data, pcm_hash, read_header, WavHeader};
pub use result::{pcm_to_wav, WavResult};
pub use writer::ByteWriter;
