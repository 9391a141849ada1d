//! Error types for the forensic report generator.
//!
//! Errors are organized by stage (configuration, generation, export) so the
//! form, the JSON API and the CLI can each decide how to surface them.

use thiserror::Error;

/// Top-level error type for forensic-core operations.
#[derive(Error, Debug)]
pub enum ForensicError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Provider construction or call errors
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    /// Report generation errors
    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    /// PDF export errors
    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// A failed call to a text-generation provider.
///
/// `status_code` is set when the provider answered with a non-success HTTP
/// status; transport failures leave it empty.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct LlmError {
    pub message: String,
    pub status_code: Option<u16>,
}

impl LlmError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: None,
        }
    }

    pub fn with_status(message: impl Into<String>, status_code: u16) -> Self {
        Self {
            message: message.into(),
            status_code: Some(status_code),
        }
    }
}

/// Errors from the report generation flow.
#[derive(Error, Debug)]
pub enum ReportError {
    /// A required form field is missing
    #[error("{0}")]
    Validation(String),

    /// The provider call failed
    #[error("{0}")]
    Llm(#[from] LlmError),
}

/// Errors while rendering or writing the PDF.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The PDF library rejected the document
    #[error("PDF rendering failed: {0}")]
    Render(String),

    /// Creating or writing the output file failed
    #[error("Failed to write PDF: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for forensic-core results.
pub type Result<T> = std::result::Result<T, ForensicError>;
