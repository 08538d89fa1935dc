//! PDF text extraction.

use std::path::Path;

use crate::error::{AuditError, Result};

/// Extract text from a PDF file.
pub fn extract(path: &Path) -> Result<String> {
    pdf_extract::extract_text(path).map_err(|e| AuditError::PdfExtract(e.to_string()))
}
