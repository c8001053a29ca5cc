//! Sample text generation.
//!
//! With `--generate`, the input is synthesized with interesting Huffman
//! characteristics: a skewed symbol distribution with a mix of sections.
//!
//! # Design
//!
//! Generated text has:
//! - Some highly repetitive sections (runs of one symbol)
//! - Mostly word-like sections drawn from a small vocabulary
//! - Some structured sections (a short pattern repeated)
//! - Some sections of random letters, including multi-byte ones
//!
//! This makes the code-length spread and the savings visible in the report.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const VOCABULARY: &[&str] = &[
    "the", "data", "code", "tree", "bit", "symbol", "frequency", "huffman", "is", "a", "of",
    "and", "compresión", "árbol", "señal", "données", "größe",
];

const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzáéíóúñçüß";

/// Generate a sample text of exactly `len` symbols.
///
/// The same `seed` always yields the same text.
pub fn generate_sample_text(seed: u64, len: usize) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut symbols: Vec<char> = Vec::with_capacity(len);

    while symbols.len() < len {
        let section_len = (len - symbols.len()).min(rng.gen_range(16..=256));

        // Choose section type randomly
        match rng.gen_range(0..10u8) {
            // 10% runs of one symbol
            0 => {
                let symbol = random_letter(&mut rng);
                symbols.extend(std::iter::repeat(symbol).take(section_len));
            }

            // 60% word-like text
            1..=6 => {
                let start = symbols.len();
                while symbols.len() - start < section_len {
                    let word = VOCABULARY[rng.gen_range(0..VOCABULARY.len())];
                    symbols.extend(word.chars());
                    symbols.push(if rng.gen_bool(0.1) { '.' } else { ' ' });
                }
                symbols.truncate(start + section_len);
            }

            // 20% repeating patterns
            7..=8 => {
                let pattern: Vec<char> = (0..rng.gen_range(2..=8))
                    .map(|_| random_letter(&mut rng))
                    .collect();
                symbols.extend(pattern.iter().cycle().take(section_len));
            }

            // 10% random letters
            _ => {
                for _ in 0..section_len {
                    symbols.push(random_letter(&mut rng));
                }
            }
        }
    }

    symbols.into_iter().collect()
}

fn random_letter(rng: &mut ChaCha8Rng) -> char {
    let count = LETTERS.chars().count();
    LETTERS
        .chars()
        .nth(rng.gen_range(0..count))
        .unwrap_or('a')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_sample_text() {
        let text = generate_sample_text(42, 1000);
        assert_eq!(text.chars().count(), 1000);
    }

    #[test]
    fn test_determinism() {
        let text1 = generate_sample_text(12345, 5000);
        let text2 = generate_sample_text(12345, 5000);

        assert_eq!(text1, text2);
    }

    #[test]
    fn test_different_seeds() {
        let text1 = generate_sample_text(1, 1000);
        let text2 = generate_sample_text(2, 1000);

        assert_ne!(text1, text2);
    }

    #[test]
    fn test_various_sizes() {
        for size in [0, 1, 17, 100, 1000, 10000] {
            let text = generate_sample_text(999, size);
            assert_eq!(text.chars().count(), size);
        }
    }

    #[test]
    fn test_skewed_distribution() {
        let text = generate_sample_text(7, 20000);
        let spaces = text.chars().filter(|&c| c == ' ').count();
        let z_count = text.chars().filter(|&c| c == 'z').count();

        assert!(spaces > z_count);
    }
}
