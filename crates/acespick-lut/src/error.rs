//! LUT error types.

use thiserror::Error;

/// Result type for LUT operations.
pub type LutResult<T> = Result<T, LutError>;

/// Errors that can occur while building or parsing LUTs.
#[derive(Debug, Error)]
pub enum LutError {
    /// Malformed LUT text: bad magic line, header, or dimensions.
    ///
    /// Parsing cannot proceed past this; the whole load fails.
    #[error("format error: {0}")]
    Format(String),

    /// Invalid table shape (size/component mismatch).
    #[error("invalid LUT size: {0}")]
    InvalidSize(String),

    /// I/O error while reading a LUT file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
