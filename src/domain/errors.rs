//! Domain error types
//!
//! This module defines the error hierarchy for the exporter. Errors are
//! domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main exporter error type
///
/// This is the primary error type used throughout the library. The CLI layer
/// wraps it in `anyhow` for reporting.
#[derive(Debug, Error)]
pub enum SolixError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Document source errors (a response could not be obtained)
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    /// Export process errors
    #[error("Export error: {0}")]
    Export(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Audit log errors
    #[error("Audit error: {0}")]
    Audit(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Errors raised while obtaining a document from a [`DocumentSource`]
///
/// These stand in for upstream request failures of the cloud API client: the
/// affected document is skipped and the run continues.
///
/// [`DocumentSource`]: crate::adapters::DocumentSource
#[derive(Debug, Error)]
pub enum SourceError {
    /// The source itself is unusable (missing directory, unreadable listing)
    #[error("Source unavailable: {0}")]
    Unavailable(String),

    /// The requested document does not exist
    #[error("Document not found: {0}")]
    NotFound(String),

    /// The document could not be read
    #[error("Failed to read document {name}: {message}")]
    ReadFailed { name: String, message: String },

    /// The document is not valid JSON
    #[error("Invalid JSON in document {name}: {message}")]
    InvalidDocument { name: String, message: String },
}

// Conversion from std::io::Error
impl From<std::io::Error> for SolixError {
    fn from(err: std::io::Error) -> Self {
        SolixError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for SolixError {
    fn from(err: serde_json::Error) -> Self {
        SolixError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for SolixError {
    fn from(err: toml::de::Error) -> Self {
        SolixError::Configuration(format!("TOML parse error: {err}"))
    }
}
