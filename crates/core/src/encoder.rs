//! Text encoding: concatenate the code of every symbol, in text order.

use crate::bitio::{BitReader, BitWriter};
use crate::codes::CodeTable;
use crate::error::{EncodeError, Result};
use std::fmt;

/// The encoded bit string of a text.
///
/// Bits are packed MSB-first; `Display` renders them as '0'/'1' characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedText {
    bytes: Vec<u8>,
    bit_len: usize,
}

impl EncodedText {
    /// Length of the encoded text in bits.
    pub fn len(&self) -> usize {
        self.bit_len
    }

    pub fn is_empty(&self) -> bool {
        self.bit_len == 0
    }

    /// Packed bits, zero-padded to a whole number of bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Iterate the encoded bits in order.
    pub fn bits(&self) -> BitReader<'_> {
        BitReader::new(&self.bytes, self.bit_len)
    }
}

impl fmt::Display for EncodedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.bits() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Encode `text` with `codes`.
///
/// # Errors
/// `EncodeError::LookupFailure` for the first symbol of `text` with no code.
/// Symbols are never skipped.
pub fn encode(text: &str, codes: &CodeTable) -> Result<EncodedText> {
    let mut writer = BitWriter::new();

    for (position, symbol) in text.chars().enumerate() {
        let code = codes
            .get(symbol)
            .ok_or(EncodeError::LookupFailure { symbol, position })?;
        writer.extend(code.bits().iter().copied());
    }

    let (bytes, bit_len) = writer.finish();
    Ok(EncodedText { bytes, bit_len })
}
