//! DOCX text extraction.
//!
//! A DOCX file is a ZIP container; the body lives in `word/document.xml`.
//! Paragraphs (`<w:p>`) are joined with newlines so clause markers stay at
//! line boundaries for the segmenter.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::Result;

/// Extract text from a DOCX file.
pub fn extract(path: &Path) -> Result<String> {
    let file = File::open(path)?;
    let mut archive = zip::ZipArchive::new(file)?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")?
        .read_to_string(&mut xml)?;

    parse_document_xml(&xml)
}

/// Pull paragraph text out of the document XML.
///
/// Ignores namespaces and non-text runs; text runs (`<w:t>`) within one
/// paragraph are concatenated, paragraphs are separated by newlines.
fn parse_document_xml(xml: &str) -> Result<String> {
    let doc = roxmltree::Document::parse(xml)?;

    let mut paragraphs: Vec<String> = Vec::new();
    for node in doc
        .descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "p")
    {
        let mut text = String::new();
        for run in node
            .descendants()
            .filter(|n| n.is_element() && n.tag_name().name() == "t")
        {
            if let Some(t) = run.text() {
                text.push_str(t);
            }
        }
        if !text.trim().is_empty() {
            paragraphs.push(text);
        }
    }

    Ok(paragraphs.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>1. Definitions</w:t></w:r></w:p>
    <w:p><w:r><w:t>In this agreement </w:t></w:r><w:r><w:t>terms have defined meanings.</w:t></w:r></w:p>
    <w:p><w:r><w:t xml:space="preserve">  </w:t></w:r></w:p>
    <w:p><w:r><w:t>2. Term</w:t></w:r></w:p>
  </w:body>
</w:document>"#;

    #[test]
    fn test_parse_document_xml_paragraphs() {
        let text = parse_document_xml(SAMPLE_XML).unwrap();
        assert_eq!(
            text,
            "1. Definitions\nIn this agreement terms have defined meanings.\n2. Term"
        );
    }

    #[test]
    fn test_parse_document_xml_invalid() {
        assert!(parse_document_xml("<not closed").is_err());
    }
}
