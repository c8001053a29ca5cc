//! huffman-text-core: Huffman coding of text, with compression statistics
//!
//! This library builds a prefix-free binary code for the symbols (`char`s) of
//! a text and encodes the text with it:
//! - Counts symbol frequencies
//! - Builds a Huffman tree with a deterministic tie-break
//! - Reads codes off the tree (left = 0, right = 1)
//! - Encodes the text into a bit string
//! - Reports sizes, compression ratio and percentage saved
//!
//! # Architecture
//!
//! Data flows strictly forward, one module per stage:
//! - `frequency`: symbol counting
//! - `tree`: arena-based Huffman tree and its construction
//! - `codes`: code words and the code table
//! - `encoder`: text -> packed bit string
//! - `stats`: compression statistics
//! - `pipeline`: a whole run, keeping every intermediate artifact
//! - `bitio`: bit packing used by the encoded text
//!
//! # Example
//!
//! ```
//! use huffman_text_core::HuffmanRun;
//!
//! let run = HuffmanRun::from_text("aaaa").unwrap();
//! assert_eq!(run.codes().get('a').unwrap().to_string(), "0");
//! assert_eq!(run.encoded().to_string(), "0000");
//! assert_eq!(run.stats().ratio, 8.0);
//! ```
//!
//! # Design Principles
//!
//! - **No panics**: the only failure (encoding against a foreign code table)
//!   is a structured error
//! - **Deterministic**: the same text always yields the same codes and bits
//! - **Pure**: nothing here performs I/O or prints

pub mod bitio;
pub mod codes;
pub mod encoder;
pub mod error;
pub mod frequency;
pub mod pipeline;
pub mod stats;
pub mod tree;

// Re-export commonly used types
pub use codes::{generate_codes, Code, CodeTable};
pub use encoder::{encode, EncodedText};
pub use error::{EncodeError, Error, Result};
pub use frequency::{count_frequencies, FrequencyTable};
pub use pipeline::{huffman_encode, HuffmanRun};
pub use stats::{analyze, CompressionStats};
pub use tree::{build_tree, Edge, HuffmanTree, Node, NodeId};
