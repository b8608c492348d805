//! Error types for the CLI application.

use glowscan_extractor::ExtractorError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Extraction or output error
    #[error(transparent)]
    Extractor(#[from] ExtractorError),

    /// Logging could not be initialized
    #[error("Logging error: {0}")]
    Logging(String),
}
