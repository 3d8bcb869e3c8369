//! Error types for adjective detection

use thiserror::Error;

/// Error type for detection operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A detector identifier outside the known set was requested
    #[error("Invalid detector: {0}")]
    InvalidDetector(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type for detection operations
pub type Result<T> = std::result::Result<T, Error>;
