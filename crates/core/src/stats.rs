//! Compression statistics for an encoded text.
//!
//! # Baseline
//!
//! The uncompressed size assumes a fixed 8 bits per original symbol. This is
//! a stated simplification, not a measurement: a non-ASCII `char` takes 2-4
//! bytes in UTF-8, so ratios for such text understate the real saving.
//!
//! # Degenerate sizes
//!
//! - compressed size 0 (empty text): ratio is `f64::INFINITY`
//! - original size 0: percentage saved is 0
//! - `original_bits` saturates at `u64::MAX`; ratio and percentage are
//!   computed in `f64` from the symbol count, so they stay finite

/// Bits per original symbol in the uncompressed baseline.
pub const BITS_PER_SYMBOL: u64 = 8;

/// Size comparison between a text and its encoding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompressionStats {
    /// Number of symbols in the original text
    pub original_symbols: u64,

    /// Uncompressed size: symbol count × `BITS_PER_SYMBOL`, saturating
    pub original_bits: u64,

    /// Encoded size in bits
    pub compressed_bits: u64,

    /// original / compressed, `f64::INFINITY` when compressed is 0
    pub ratio: f64,

    /// (1 - compressed / original) × 100, 0 when original is 0
    pub percent_saved: f64,
}

impl CompressionStats {
    /// Compute statistics from a symbol count and an encoded bit length.
    pub fn new(original_symbol_count: u64, encoded_bit_length: u64) -> Self {
        let original_bits = original_symbol_count.saturating_mul(BITS_PER_SYMBOL);
        let compressed_bits = encoded_bit_length;
        let exact_original_bits = original_symbol_count as f64 * BITS_PER_SYMBOL as f64;

        let ratio = if compressed_bits > 0 {
            exact_original_bits / compressed_bits as f64
        } else {
            f64::INFINITY
        };

        let percent_saved = if original_symbol_count > 0 {
            (1.0 - compressed_bits as f64 / exact_original_bits) * 100.0
        } else {
            0.0
        };

        Self {
            original_symbols: original_symbol_count,
            original_bits,
            compressed_bits,
            ratio,
            percent_saved,
        }
    }

    /// Number of original symbols the statistics were computed for.
    pub fn symbol_count(&self) -> u64 {
        self.original_symbols
    }

    /// True when the ratio is the "infinite" sentinel (nothing was encoded).
    pub fn is_ratio_infinite(&self) -> bool {
        self.ratio.is_infinite()
    }

    /// Average encoded bits per original symbol, 0.0 for empty text.
    pub fn bits_per_symbol(&self) -> f64 {
        match self.symbol_count() {
            0 => 0.0,
            n => self.compressed_bits as f64 / n as f64,
        }
    }

    /// Export statistics as a simple text format (for parsing/testing).
    pub fn export_text(&self) -> String {
        format!(
            "original_bits={}\n\
             compressed_bits={}\n\
             ratio={:.4}\n\
             percent_saved={:.4}\n\
             bits_per_symbol={:.4}\n",
            self.original_bits,
            self.compressed_bits,
            self.ratio,
            self.percent_saved,
            self.bits_per_symbol(),
        )
    }
}

/// Compute compression statistics from a symbol count and an encoded bit length.
pub fn analyze(original_symbol_count: u64, encoded_bit_length: u64) -> CompressionStats {
    CompressionStats::new(original_symbol_count, encoded_bit_length)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_symbol_text() {
        let stats = analyze(4, 4);

        assert_eq!(stats.original_bits, 32);
        assert_eq!(stats.compressed_bits, 4);
        assert_eq!(stats.ratio, 8.0);
        assert_eq!(stats.percent_saved, 87.5);
        assert_eq!(stats.bits_per_symbol(), 1.0);
    }

    #[test]
    fn test_empty_text() {
        let stats = analyze(0, 0);

        assert_eq!(stats.original_bits, 0);
        assert_eq!(stats.compressed_bits, 0);
        assert_eq!(stats.percent_saved, 0.0);
        assert!(stats.is_ratio_infinite());
        assert_eq!(stats.bits_per_symbol(), 0.0);
    }

    #[test]
    fn test_expansion_gives_negative_saving() {
        // Not reachable from Huffman codes, but the arithmetic must hold
        let stats = analyze(1, 16);
        assert_eq!(stats.ratio, 0.5);
        assert_eq!(stats.percent_saved, -100.0);
    }

    #[test]
    fn test_export_text() {
        let stats = analyze(4, 4);
        let text = stats.export_text();

        assert!(text.contains("original_bits=32"));
        assert!(text.contains("compressed_bits=4"));
        assert!(text.contains("ratio=8.0000"));
        assert!(text.contains("percent_saved=87.5000"));
    }

    #[test]
    fn test_huge_symbol_count_saturates() {
        let stats = analyze(u64::MAX / 4, 1);

        assert_eq!(stats.original_symbols, u64::MAX / 4);
        assert_eq!(stats.symbol_count(), u64::MAX / 4);
        assert_eq!(stats.original_bits, u64::MAX);
        assert!(stats.ratio.is_finite());
        assert!(stats.ratio > u64::MAX as f64);
        assert!(stats.percent_saved > 99.0 && stats.percent_saved <= 100.0);
    }

    #[test]
    fn test_symbol_count_at_multiplication_limit() {
        let fits = analyze(u64::MAX / 8, u64::MAX / 8);
        assert_eq!(fits.original_bits, (u64::MAX / 8) * 8);
        assert_eq!(fits.ratio, 8.0);
        assert_eq!(fits.bits_per_symbol(), 1.0);

        let over = analyze(u64::MAX / 8 + 1, u64::MAX / 8 + 1);
        assert_eq!(over.original_bits, u64::MAX);
        assert_eq!(over.ratio, 8.0);
        assert_eq!(over.percent_saved, 87.5);
        assert_eq!(over.bits_per_symbol(), 1.0);
    }

    #[test]
    fn test_export_text_infinite_ratio() {
        assert!(analyze(0, 0).export_text().contains("ratio=inf"));
    }
}
