//! Error types for the huffman-text system.
//!
//! The algorithm is total over well-formed inputs: empty text is a valid
//! input, not an error. The only contract violation a caller can cause is
//! encoding text against a code table that was derived from some other text.

use thiserror::Error;

/// Top-level error type for all operations in the system.
///
/// Each variant corresponds to a specific failure domain:
/// - Encode: symbol lookup against a caller-supplied code table
/// - I/O: reading input text from the file system
#[derive(Debug, Error)]
pub enum Error {
    /// Encoder error (symbol without a code)
    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Encoder errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    /// A symbol of the text has no entry in the code table.
    ///
    /// `position` is the zero-based symbol index in the text, not a byte offset.
    #[error("no code for symbol {symbol:?} at position {position}")]
    LookupFailure { symbol: char, position: usize },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
