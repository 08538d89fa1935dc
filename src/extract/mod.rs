//! Document text extraction.
//!
//! Turns PDF, DOCX and plain-text files into the raw text the segmenter
//! consumes, then applies the cleanup rules that make scanned legal
//! documents segmentable (page numbers, currency line-break artifacts).

mod docx;
mod pdf;

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::{validate_input_path, DocumentFormat};
use crate::error::{AuditError, Result};

/// Standalone page-number lines left behind by PDF extraction.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PAGE_NUMBER_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\d+\s*\n").expect("valid regex"));

/// Extract raw text from a document file.
///
/// Validates the path first, dispatches on the extension, and fails with
/// [`AuditError::EmptyDocument`] when extraction yields only whitespace.
pub fn extract_text(path: &Path) -> Result<String> {
    let format = validate_input_path(path)?;

    let raw = match format {
        DocumentFormat::Pdf => pdf::extract(path)?,
        DocumentFormat::Docx => docx::extract(path)?,
        DocumentFormat::Text => fs::read_to_string(path)?,
    };

    let text = cleanup_text(&raw);
    if text.trim().is_empty() {
        return Err(AuditError::EmptyDocument(path.to_path_buf()));
    }

    Ok(text)
}

/// Repair extraction artifacts before segmentation.
///
/// - Currency abbreviations split across line breaks ("Rs.\n500") are
///   rejoined, and "Rs. " is collapsed to "Rs." so amounts match the
///   entity patterns.
/// - Standalone page-number lines are removed.
#[must_use]
pub fn cleanup_text(text: &str) -> String {
    let text = text.replace("Rs.\n", "Rs. ").replace("Rs. ", "Rs.");
    PAGE_NUMBER_LINE.replace_all(&text, "\n").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_cleanup_removes_page_numbers() {
        let text = "end of page one.\n 12 \nstart of page two.";
        assert_eq!(cleanup_text(text), "end of page one.\nstart of page two.");
    }

    #[test]
    fn test_cleanup_rejoins_currency() {
        assert_eq!(cleanup_text("a fee of Rs.\n5,000 monthly"), "a fee of Rs.5,000 monthly");
        assert_eq!(cleanup_text("a fee of Rs. 5,000 monthly"), "a fee of Rs.5,000 monthly");
    }

    #[test]
    fn test_cleanup_keeps_numbered_headers() {
        // "1. Definitions" is not a standalone number line and must survive
        let text = "intro text\n1. Definitions\nbody";
        assert_eq!(cleanup_text(text), text);
    }

    #[test]
    fn test_extract_text_txt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contract.txt");
        let mut f = fs::File::create(&path).unwrap();
        write!(f, "1. Scope\nThe vendor shall provide services.").unwrap();

        let text = extract_text(&path).unwrap();
        assert!(text.contains("1. Scope"));
    }

    #[test]
    fn test_extract_text_empty_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        fs::File::create(&path).unwrap();

        let err = extract_text(&path).unwrap_err();
        assert!(matches!(err, AuditError::EmptyDocument(_)));
    }

    #[test]
    fn test_extract_text_unsupported_extension() {
        let err = extract_text(Path::new("contract.odt")).unwrap_err();
        assert!(matches!(err, AuditError::UnsupportedFormat(_)));
    }
}
