//! Configuration constants and validation functions for the auditor.

use std::path::Path;

use crate::error::{AuditError, Result};

/// Default base URL for the chat-completions API (OpenAI-compatible).
pub const DEFAULT_API_BASE: &str = "https://api.groq.com/openai/v1";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

/// Default model used for clause annotation.
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

/// Sampling temperature for annotation calls.
///
/// Kept low so verdicts stay deterministic enough to aggregate.
pub const MODEL_TEMPERATURE: f32 = 0.1;

/// HTTP timeout in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Minimum trimmed content length for a clause to be emitted.
///
/// Fragments at or below this length are treated as segmentation noise
/// (stray numbering, orphaned punctuation) and silently dropped.
pub const NOISE_THRESHOLD: usize = 20;

/// Minimum token count from marker splitting before we trust the structure.
///
/// Below this the heuristic found nothing and the whole document becomes a
/// single fallback clause.
pub const MIN_STRUCTURE_TOKENS: usize = 3;

/// Header assigned to content preceding the first detected marker.
pub const PREAMBLE_LABEL: &str = "Preamble / Recital";

/// Header for the single whole-document clause when no structure is found.
pub const FALLBACK_LABEL: &str = "Contract Terms";

/// Normalized header for WHEREAS-style recitals.
pub const RECITAL_LABEL: &str = "Recital (Background)";

/// Maximum clause characters sent to the model for a risk verdict.
pub const CLAUSE_PROMPT_LIMIT: usize = 1500;

/// Document characters used for type classification.
pub const CLASSIFY_PROMPT_LIMIT: usize = 400;

/// Document characters used for the executive summary.
pub const SUMMARY_PROMPT_LIMIT: usize = 3000;

/// Document characters used as context for Q&A.
pub const CHAT_CONTEXT_LIMIT: usize = 4000;

/// Risk score above which a document or clause is labeled High.
pub const HIGH_RISK_THRESHOLD: u8 = 70;

/// Risk score above which a document or clause is labeled Medium.
pub const MEDIUM_RISK_THRESHOLD: u8 = 30;

/// Text wrap width for Markdown report output.
pub const TEXT_WRAP_WIDTH: usize = 100;

/// Default output directory for audit logs and reports.
pub const DEFAULT_OUTPUT_DIR: &str = "audit_logs";

/// Supported input document formats, derived from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Text,
}

impl DocumentFormat {
    /// Determine the format from a path's extension (case-insensitive).
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "txt" => Some(Self::Text),
            _ => None,
        }
    }
}

/// Validate that an input path exists and has a supported extension.
///
/// Runs before any extraction or network call so the user gets a clear
/// error for typos and unsupported formats.
///
/// # Returns
/// The detected [`DocumentFormat`] on success.
pub fn validate_input_path(path: &Path) -> Result<DocumentFormat> {
    let format = DocumentFormat::from_path(path).ok_or_else(|| {
        let ext = path
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_else(|| "<none>".to_string());
        AuditError::UnsupportedFormat(ext)
    })?;

    if !path.is_file() {
        return Err(AuditError::InputNotFound(path.to_path_buf()));
    }

    Ok(format)
}
