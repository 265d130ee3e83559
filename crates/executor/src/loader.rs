//! Raw binary image loader.
//!
//! A program image is a flat sequence of 4-byte big-endian instruction
//! words, read to end of file. A trailing partial word is zero-padded up to
//! a word boundary and counts toward the image extent.

/// Parsed program image.
pub struct Image {
    words: Vec<u32>,
}

impl Image {
    /// Assemble big-endian words from a raw byte stream.
    pub fn parse(data: &[u8]) -> Self {
        let mut words = Vec::with_capacity(data.len().div_ceil(4));
        for chunk in data.chunks(4) {
            let mut bytes = [0u8; 4];
            bytes[..chunk.len()].copy_from_slice(chunk);
            words.push(u32::from_be_bytes(bytes));
        }
        Self { words }
    }

    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Image extent in bytes, after padding.
    pub fn byte_len(&self) -> u32 {
        (self.words.len() * 4) as u32
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
