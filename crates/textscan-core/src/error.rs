//! Error types for the textscan-core library.

use thiserror::Error;

/// Main error type for the textscan library.
#[derive(Error, Debug)]
pub enum ScanError {
    /// A category label outside the fixed registry was requested.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// Configuration could not be parsed or serialized.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for ScanError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type for the textscan library.
pub type Result<T> = std::result::Result<T, ScanError>;
