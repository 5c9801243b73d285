//! Structured error types for the ribo pipeline.

use thiserror::Error;

/// Unified error type for all ribo operations.
#[derive(Debug, Error)]
pub enum RiboError {
    /// I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A symbol outside the expected nucleotide alphabet.
    ///
    /// `stage` names the pipeline boundary where the symbol was seen and
    /// `position` is the 0-based offset of the first offending byte.
    #[error(
        "invalid {alphabet} base '{}' (0x{base:02X}) at position {position} during {stage}",
        printable(.base)
    )]
    InvalidBase {
        stage: &'static str,
        alphabet: &'static str,
        base: u8,
        position: usize,
    },

    /// Invalid input (bad arguments, wrong lengths)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Parse error (unrecognised token)
    #[error("parse error: {0}")]
    Parse(String),
}

impl RiboError {
    /// Whether this error reports a foreign nucleotide symbol.
    pub fn is_invalid_base(&self) -> bool {
        matches!(self, RiboError::InvalidBase { .. })
    }
}

fn printable(base: &u8) -> String {
    char::from(*base).escape_default().to_string()
}

/// Convenience alias used throughout the ribo crates.
pub type Result<T> = std::result::Result<T, RiboError>;
