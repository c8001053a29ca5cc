//! Symbol frequency counting.
//!
//! A symbol is one `char` (Unicode scalar value) of the input text. Counts
//! are kept in a `BTreeMap` so iteration order is the symbols' code-point
//! order, which keeps every downstream artifact reproducible.

use std::collections::BTreeMap;

/// Occurrence count of every distinct symbol of a text.
///
/// Every stored count is positive: a symbol is present if and only if it
/// occurs in the text it was counted from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<char, u64>,
    total: u64,
}

impl FrequencyTable {
    /// Count symbol occurrences in `text`.
    ///
    /// Empty text yields an empty table.
    pub fn count(text: &str) -> Self {
        let mut counts = BTreeMap::new();
        let mut total = 0u64;

        for symbol in text.chars() {
            *counts.entry(symbol).or_insert(0) += 1;
            total += 1;
        }

        Self { counts, total }
    }

    /// Count of `symbol`, or 0 if it never occurred.
    pub fn get(&self, symbol: char) -> u64 {
        self.counts.get(&symbol).copied().unwrap_or(0)
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of symbols counted (sum of all counts).
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Iterate `(symbol, count)` pairs in code-point order.
    pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.counts.iter().map(|(&symbol, &count)| (symbol, count))
    }

    /// Shannon entropy of the distribution, in bits per symbol.
    ///
    /// This is the lower bound on the average code length of any prefix
    /// code for the table. Returns 0.0 for an empty table.
    pub fn entropy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let total = self.total as f64;
        self.counts
            .values()
            .map(|&count| {
                let prob = count as f64 / total;
                -prob * prob.log2()
            })
            .sum()
    }
}

/// Count the occurrences of each distinct symbol of `text`.
pub fn count_frequencies(text: &str) -> FrequencyTable {
    FrequencyTable::count(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        let freqs = count_frequencies("");
        assert!(freqs.is_empty());
        assert_eq!(freqs.total(), 0);
        assert_eq!(freqs.entropy(), 0.0);
    }

    #[test]
    fn test_counts() {
        let freqs = count_frequencies("abracadabra");

        assert_eq!(freqs.len(), 5);
        assert_eq!(freqs.get('a'), 5);
        assert_eq!(freqs.get('b'), 2);
        assert_eq!(freqs.get('r'), 2);
        assert_eq!(freqs.get('c'), 1);
        assert_eq!(freqs.get('d'), 1);
        assert_eq!(freqs.get('z'), 0);
        assert_eq!(freqs.total(), 11);
    }

    #[test]
    fn test_symbols_are_chars_not_bytes() {
        // 'ñ' and 'é' are two bytes each in UTF-8
        let freqs = count_frequencies("ñañé");

        assert_eq!(freqs.len(), 3);
        assert_eq!(freqs.get('ñ'), 2);
        assert_eq!(freqs.total(), 4);
    }

    #[test]
    fn test_iteration_order() {
        let freqs = count_frequencies("cba cab");
        let symbols: Vec<char> = freqs.iter().map(|(s, _)| s).collect();
        assert_eq!(symbols, vec![' ', 'a', 'b', 'c']);
    }

    #[test]
    fn test_entropy() {
        // Single symbol carries no information
        assert_eq!(count_frequencies("aaaa").entropy(), 0.0);

        // Four equiprobable symbols need two bits each
        let freqs = count_frequencies("abcd");
        assert!((freqs.entropy() - 2.0).abs() < 1e-12);
    }
}
