//! Error types for the line-coding engine.
//!
//! Encoding either returns a complete signal or one of these errors; no
//! partial output is ever produced.

use thiserror::Error;

/// Top-level error type for all operations in the engine.
///
/// Each variant corresponds to a specific failure domain:
/// - Input: the bit message violates its length or alphabet constraints
/// - Scheme: the scheme identifier is outside the fixed set of six
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Bit message rejected (empty, too long, or non-binary)
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    /// Scheme name does not match any supported line code
    #[error("unknown encoding scheme: {name:?}")]
    UnknownScheme { name: String },
}

/// Bit message validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// No bits at all
    #[error("bit message is empty")]
    Empty,

    /// More bits than a single run accepts
    #[error("bit message has {len} bits, maximum is {max}")]
    TooLong { len: usize, max: usize },

    /// A character other than '0' or '1'
    #[error("invalid character {ch:?} at position {position}, expected '0' or '1'")]
    InvalidCharacter { ch: char, position: usize },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
