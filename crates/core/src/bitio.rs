//! Bit-level storage for encoded text.
//!
//! Codes are sequences of bits, and an encoded text is their concatenation.
//! Rather than holding one `char` per bit, the encoder packs bits MSB-first
//! into bytes with `BitWriter`, and readers walk them back with `BitReader`.
//!
//! # Padding Rules
//! - BitWriter: pads the final partial byte with trailing zeros and reports
//!   the exact number of meaningful bits alongside the bytes
//! - BitReader: is bounded by that bit length, so padding is never yielded
//!
//! # Example
//! ```
//! use huffman_text_core::bitio::{BitReader, BitWriter};
//!
//! let mut writer = BitWriter::new();
//! writer.extend([true, false, true]);
//! // Total: 101 -> padded to 10100000
//!
//! let (bytes, bit_len) = writer.finish();
//! assert_eq!(bytes, vec![0b1010_0000]);
//! assert_eq!(bit_len, 3);
//!
//! let bits: Vec<bool> = BitReader::new(&bytes, bit_len).collect();
//! assert_eq!(bits, vec![true, false, true]);
//! ```

/// Writes bits MSB-first into a byte buffer.
///
/// # Invariants
/// - `bit_count` is always < 8
/// - bits of `bit_buffer` below the first `bit_count` are zero
#[derive(Debug, Clone, Default)]
pub struct BitWriter {
    /// Completed bytes
    bytes: Vec<u8>,
    /// Accumulator for the current partial byte (MSB-aligned)
    bit_buffer: u8,
    /// Number of bits in bit_buffer (0-7)
    bit_count: u8,
}

impl BitWriter {
    /// Create a new BitWriter with empty output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single bit.
    pub fn write_bit(&mut self, bit: bool) {
        self.bit_buffer |= (bit as u8) << (7 - self.bit_count);
        self.bit_count += 1;

        if self.bit_count == 8 {
            self.bytes.push(self.bit_buffer);
            self.bit_buffer = 0;
            self.bit_count = 0;
        }
    }

    /// Append every bit yielded by `bits`, in order.
    pub fn extend<I>(&mut self, bits: I)
    where
        I: IntoIterator<Item = bool>,
    {
        for bit in bits {
            self.write_bit(bit);
        }
    }

    /// Finish writing and return the packed bytes and the exact bit length.
    ///
    /// Any partial final byte is flushed, padded with trailing zeros.
    pub fn finish(mut self) -> (Vec<u8>, usize) {
        let bit_len = self.bit_len();
        if self.bit_count > 0 {
            self.bytes.push(self.bit_buffer);
        }
        (self.bytes, bit_len)
    }

    /// Return the total number of bits written (including partial byte).
    pub fn bit_len(&self) -> usize {
        self.bytes.len() * 8 + self.bit_count as usize
    }
}

/// Iterates, MSB-first, over the first `bit_len` bits of a byte buffer.
///
/// # Invariants
/// - `bit_position` never exceeds `bit_len`
/// - `bit_len` never exceeds `data.len() * 8`
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    /// Source data
    data: &'a [u8],
    /// Number of meaningful bits in `data`
    bit_len: usize,
    /// Current bit position (0 = MSB of first byte)
    bit_position: usize,
}

impl<'a> BitReader<'a> {
    /// Create a reader over the first `bit_len` bits of `data`.
    ///
    /// A `bit_len` larger than the buffer is clamped to the buffer size.
    pub fn new(data: &'a [u8], bit_len: usize) -> Self {
        Self {
            data,
            bit_len: bit_len.min(data.len() * 8),
            bit_position: 0,
        }
    }

    /// Return the number of meaningful bits not yet read.
    pub fn bits_remaining(&self) -> usize {
        self.bit_len - self.bit_position
    }

    /// Check if every meaningful bit has been read.
    pub fn is_empty(&self) -> bool {
        self.bit_position >= self.bit_len
    }
}

impl Iterator for BitReader<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.is_empty() {
            return None;
        }

        let byte = self.data[self.bit_position / 8];
        let bit = (byte >> (7 - self.bit_position % 8)) & 1 == 1;
        self.bit_position += 1;

        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bits_remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BitReader<'_> {}
