//! Error types for the cast-model crate.
//!
//! Everything that can go wrong while reading provider payloads ends up
//! here: missing files, unreadable files, malformed JSON and values that
//! don't map onto the domain enums.

use thiserror::Error;

/// Errors that can occur while loading or parsing provider data.
#[derive(Error, Debug)]
pub enum CastModelError {
    /// File could not be found
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading a payload
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Payload was read but is not the JSON shape we expected
    #[error("Parse error in {source_name}: {reason}")]
    ParseError { source_name: String, reason: String },

    /// A field had a value outside its domain (e.g. unknown media type)
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CastModelError>;
