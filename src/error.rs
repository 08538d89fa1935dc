//! Error types for the auditor.
//!
//! A single `AuditError` enum for library consumers, with conversions from
//! the underlying IO/HTTP/parse errors.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the auditor library.
#[derive(Debug, Error)]
pub enum AuditError {
    /// Input file has an extension we cannot extract text from.
    #[error("Unsupported document format: '{0}'. Expected .pdf, .docx or .txt")]
    UnsupportedFormat(String),

    /// Input path does not exist or is not a regular file.
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Extraction succeeded but produced no usable text.
    #[error("Document contains no extractable text: {}", .0.display())]
    EmptyDocument(PathBuf),

    /// PDF text extraction failed.
    #[error("PDF extraction failed: {0}")]
    PdfExtract(String),

    /// DOCX container could not be opened.
    #[error("DOCX archive error: {0}")]
    DocxArchive(#[from] zip::result::ZipError),

    /// DOCX document XML could not be parsed.
    #[error("DOCX XML parsing failed: {0}")]
    DocxParse(#[from] roxmltree::Error),

    /// API key environment variable is not set.
    #[error("Missing API key: set the {0} environment variable")]
    MissingApiKey(&'static str),

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Retries exhausted for a transient failure.
    #[error("Request failed after {attempts} attempts: {message}")]
    RetriesExhausted { attempts: u32, message: String },

    /// Model returned a response we could not interpret.
    #[error("Unexpected model response: {0}")]
    ModelResponse(String),

    /// JSON (de)serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for auditor operations.
pub type Result<T> = std::result::Result<T, AuditError>;
