//! One complete run over a text: frequencies -> tree -> codes -> bits -> stats.
//!
//! Every stage's output is kept and exposed read-only, so a report renderer
//! can show the whole chain. Empty text is a valid input: it yields an empty
//! frequency table, no tree, an empty code table, an empty bit string and
//! zero-valued statistics.

use crate::codes::{generate_codes, CodeTable};
use crate::encoder::{encode, EncodedText};
use crate::error::Result;
use crate::frequency::{count_frequencies, FrequencyTable};
use crate::stats::{analyze, CompressionStats};
use crate::tree::{build_tree, HuffmanTree};

/// All artifacts of encoding one text.
#[derive(Debug, Clone)]
pub struct HuffmanRun {
    text: String,
    frequencies: FrequencyTable,
    tree: Option<HuffmanTree>,
    codes: CodeTable,
    encoded: EncodedText,
    stats: CompressionStats,
}

impl HuffmanRun {
    /// Run the full pipeline on `text`.
    ///
    /// # Errors
    /// None in practice: the code table is derived from the text itself, so
    /// every symbol has a code. The encoder's lookup error is still propagated.
    pub fn from_text(text: &str) -> Result<Self> {
        let frequencies = count_frequencies(text);
        let tree = build_tree(&frequencies);
        let codes = generate_codes(tree.as_ref());
        let encoded = encode(text, &codes)?;
        let stats = analyze(frequencies.total(), encoded.len() as u64);

        Ok(Self {
            text: text.to_string(),
            frequencies,
            tree,
            codes,
            encoded,
            stats,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    /// The Huffman tree, `None` for empty text.
    pub fn tree(&self) -> Option<&HuffmanTree> {
        self.tree.as_ref()
    }

    pub fn codes(&self) -> &CodeTable {
        &self.codes
    }

    pub fn encoded(&self) -> &EncodedText {
        &self.encoded
    }

    pub fn stats(&self) -> &CompressionStats {
        &self.stats
    }

    /// CRC32 over the code table and the encoded bits.
    ///
    /// Two runs over the same text produce the same fingerprint; comparing
    /// fingerprints is a quick check that codes are reproducible.
    pub fn fingerprint(&self) -> u32 {
        let mut hasher = crc32fast::Hasher::new();

        for (symbol, code) in self.codes.iter() {
            hasher.update(&u32::from(symbol).to_le_bytes());
            hasher.update(&(code.len() as u64).to_le_bytes());
            for &bit in code.bits() {
                hasher.update(&[bit as u8]);
            }
        }

        hasher.update(&(self.encoded.len() as u64).to_le_bytes());
        hasher.update(self.encoded.as_bytes());

        hasher.finalize()
    }
}

/// Encode `text` and return `(encoded bits, code table, tree)`.
///
/// Shorthand for callers that don't need the frequencies or statistics.
pub fn huffman_encode(text: &str) -> Result<(EncodedText, CodeTable, Option<HuffmanTree>)> {
    let run = HuffmanRun::from_text(text)?;
    Ok((run.encoded, run.codes, run.tree))
}
