//! Error types for the color crate.

use acespick_lut::LutError;
use thiserror::Error;

/// Failure while fetching a LUT resource.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// The source answered but not with the resource (HTTP-style status).
    #[error("fetching '{resource}' failed with status {status}")]
    Http {
        /// Status code reported by the source
        status: u16,
        /// Resource that was requested
        resource: String,
    },

    /// Reading the resource body failed.
    #[error("reading '{resource}' failed: {message}")]
    Read {
        /// Resource that was requested
        resource: String,
        /// Underlying failure description
        message: String,
    },
}

/// Failure while loading the LUT pair.
///
/// Retained by the pipeline after a failed load so callers can inspect
/// why the engine is running on the fallback path.
#[derive(Error, Debug)]
pub enum LoadError {
    /// A resource could not be fetched.
    #[error("resource error: {0}")]
    Resource(#[from] ResourceError),

    /// A fetched resource could not be parsed.
    #[error("parse error: {0}")]
    Parse(#[from] LutError),
}

/// Color conversion / formatting errors.
#[derive(Error, Debug)]
pub enum ColorError {
    /// A hex color string was malformed.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),
}

/// Result alias for color operations.
pub type ColorResult<T> = Result<T, ColorError>;
