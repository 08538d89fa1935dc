//! Clause annotation through the hosted model.
//!
//! Per-clause assessment is infallible: the report always needs one verdict
//! per clause, so transport or parse failures degrade to a fixed low-risk
//! fallback instead of aborting the audit.

use crate::error::Result;
use crate::llm::{prompts, LlmClient};
use crate::types::ClauseAnalysis;

/// Annotator wrapping the model client with audit-specific operations.
pub struct Annotator {
    client: LlmClient,
}

impl Annotator {
    /// Wrap a model client.
    #[must_use]
    pub fn new(client: LlmClient) -> Self {
        Self { client }
    }

    /// The model used for annotation.
    #[must_use]
    pub fn model(&self) -> &str {
        self.client.model()
    }

    /// Produce a structured risk verdict for one clause.
    ///
    /// Never fails; see [`ClauseAnalysis::fallback`].
    #[must_use]
    pub fn assess_clause(&self, content: &str) -> ClauseAnalysis {
        let prompt = prompts::risk_assessment(content);

        match self.client.chat(&prompt, true) {
            Ok(raw) => parse_analysis(&raw),
            Err(e) => {
                tracing::warn!(error = %e, "Clause assessment failed, using fallback verdict");
                ClauseAnalysis::fallback()
            }
        }
    }

    /// Classify the document type from its opening text.
    pub fn classify_document(&self, text: &str) -> Result<String> {
        self.client.chat(&prompts::classify_document(text), false)
    }

    /// Generate a 3-bullet executive summary.
    pub fn executive_summary(&self, full_text: &str) -> Result<String> {
        self.client.chat(&prompts::executive_summary(full_text), false)
    }

    /// Answer a question about the document.
    pub fn answer_question(&self, context: &str, query: &str) -> Result<String> {
        self.client
            .chat(&prompts::answer_question(context, query), false)
    }

    /// Translate a Hindi clause to English.
    pub fn translate_clause(&self, content: &str) -> Result<String> {
        self.client.chat(&prompts::translate_clause(content), false)
    }
}

/// Parse a model verdict, degrading to the fallback on malformed JSON.
///
/// Field-level leniency lives on [`ClauseAnalysis`] itself; this only has
/// to handle responses that are not a JSON object at all.
fn parse_analysis(raw: &str) -> ClauseAnalysis {
    match serde_json::from_str(raw) {
        Ok(analysis) => analysis,
        Err(e) => {
            tracing::warn!(error = %e, "Unparseable verdict JSON, using fallback");
            ClauseAnalysis::fallback()
        }
    }
}
