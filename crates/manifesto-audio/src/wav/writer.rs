//! Growable little-endian byte buffer used to assemble WAV files.

/// Append-only byte buffer with fixed-width little-endian writes.
///
/// The write position is the buffer length; callers never manipulate a
/// cursor directly.
#[derive(Debug, Default, Clone)]
pub struct ByteWriter {
    bytes: Vec<u8>,
}

impl ByteWriter {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty writer with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
        }
    }

    /// Appends a four-character chunk identifier such as `b"RIFF"`.
    pub fn put_tag(&mut self, tag: &[u8; 4]) -> &mut Self {
        self.bytes.extend_from_slice(tag);
        self
    }

    /// Appends an unsigned 16-bit integer.
    pub fn put_u16_le(&mut self, value: u16) -> &mut Self {
        self.bytes.extend_from_slice(&value.to_le_bytes());
        self
    }

    /// Appends an unsigned 32-bit integer.
    pub fn put_u32_le(&mut self, value: u32) -> &mut Self {
        self.bytes.extend_from_slice(&value.to_le_bytes());
        self
    }

    /// Appends a signed 16-bit integer.
    pub fn put_i16_le(&mut self, value: i16) -> &mut Self {
        self.bytes.extend_from_slice(&value.to_le_bytes());
        self
    }

    /// Current write position.
    pub fn position(&self) -> usize {
        self.bytes.len()
    }

    /// Borrows the bytes written so far.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the writer and returns its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
