//! Error types for the Extractor

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort an extraction run.
///
/// Per-marker problems (missing, empty or undecodable regions) are not errors;
/// they are logged and the run carries on.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Input document does not exist
    #[error("HTML file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Input document could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// Path being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Output file or directory could not be written
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        /// Path being written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A marker pattern failed to compile
    #[error("Invalid marker pattern: {0}")]
    Pattern(String),
}

impl From<regex::Error> for ExtractorError {
    fn from(e: regex::Error) -> Self {
        ExtractorError::Pattern(e.to_string())
    }
}
