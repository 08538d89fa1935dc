//! Main audit pipeline that ties all components together.

use std::path::Path;

use crate::annotate::Annotator;
use crate::entities::extract_entities;
use crate::error::Result;
use crate::extract::extract_text;
use crate::language::needs_translation;
use crate::risk::overall_risk;
use crate::segment::{Clause, Segmenter};
use crate::types::{ClauseReview, ContractAudit};

/// Extract and segment a document without any model calls.
///
/// # Arguments
/// * `path` - Path to a .pdf, .docx or .txt contract
///
/// # Returns
/// The ordered clause sequence; at least one clause.
pub fn segment_document(path: &Path) -> Result<Vec<Clause>> {
    let text = extract_text(path)?;
    Ok(Segmenter::default().segment(&text))
}

/// Run the full audit pipeline on a document.
///
/// Steps: extract text, classify the document, scan entities, segment into
/// clauses, annotate each clause (translating Hindi clauses first), then
/// aggregate into a [`ContractAudit`]. Clauses are processed sequentially;
/// only extraction failures abort the run — classification, summary and
/// per-clause annotation all degrade with a warning.
///
/// # Arguments
/// * `path` - Path to the contract file
/// * `annotator` - Model client wrapper
/// * `on_clause` - Progress callback invoked with (done, total) per clause
pub fn run_audit(
    path: &Path,
    annotator: &Annotator,
    mut on_clause: impl FnMut(usize, usize),
) -> Result<ContractAudit> {
    let text = extract_text(path)?;

    let document_type = match annotator.classify_document(&text) {
        Ok(doc_type) if !doc_type.trim().is_empty() => doc_type,
        Ok(_) => "General Contract".to_string(),
        Err(e) => {
            tracing::warn!(error = %e, "Document classification failed");
            "General Contract".to_string()
        }
    };

    let entities = extract_entities(&text);

    let clauses = Segmenter::default().segment(&text);
    let total = clauses.len();
    tracing::info!(clauses = total, document_type = %document_type, "Annotating clauses");

    let mut reviews: Vec<ClauseReview> = Vec::with_capacity(total);
    for (i, clause) in clauses.iter().enumerate() {
        reviews.push(annotate_clause(annotator, clause));
        on_clause(i + 1, total);
    }

    let risk_score = overall_risk(&reviews);

    let summary = match annotator.executive_summary(&text) {
        Ok(summary) => summary,
        Err(e) => {
            tracing::warn!(error = %e, "Executive summary failed");
            String::new()
        }
    };

    Ok(ContractAudit {
        timestamp: chrono::Local::now(),
        document_type,
        risk_score,
        summary,
        entities,
        detailed_analysis: reviews,
    })
}

/// Annotate one clause, translating non-Latin content first.
///
/// Translation failure is non-fatal: the original content is assessed
/// as-is, which at worst costs verdict quality, not the audit.
fn annotate_clause(annotator: &Annotator, clause: &Clause) -> ClauseReview {
    let (content, translated) = if needs_translation(&clause.content) {
        match annotator.translate_clause(&clause.content) {
            Ok(english) => (english, true),
            Err(e) => {
                tracing::warn!(error = %e, header = %clause.header, "Translation failed");
                (clause.content.clone(), false)
            }
        }
    } else {
        (clause.content.clone(), false)
    };

    let analysis = annotator.assess_clause(&content);
    ClauseReview::new(clause, analysis).with_translated(translated)
}

/// Answer a question about a document, using its text as context.
pub fn ask_document(path: &Path, annotator: &Annotator, question: &str) -> Result<String> {
    let text = extract_text(path)?;
    annotator.answer_question(&text, question)
}
