//! Prompt builders for the annotation model.
//!
//! Prompts embed a bounded slice of the source text; truncation is by
//! character so a multi-byte clause never splits mid-codepoint.

use crate::config::{
    CHAT_CONTEXT_LIMIT, CLASSIFY_PROMPT_LIMIT, CLAUSE_PROMPT_LIMIT, SUMMARY_PROMPT_LIMIT,
};
use crate::types::CLAUSE_CATEGORIES;

/// Truncate text to at most `max` characters.
#[must_use]
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Prompt for a structured per-clause risk verdict.
#[must_use]
pub fn risk_assessment(clause_text: &str) -> String {
    let categories = CLAUSE_CATEGORIES.join(", ");
    let text = truncate_chars(clause_text, CLAUSE_PROMPT_LIMIT);

    format!(
        r#"Analyze this contract clause text strictly.

TEXT: "{text}"

TASK:
1. CATEGORY: Pick one from: [{categories}].
2. MODALITY: Pick ONE: "OBLIGATION", "RIGHT", "PROHIBITION", "DEFINITION".
3. AMBIGUITY: true/false.
4. SCORE: 0-100 (High Risk = >70).
5. LABEL: High/Medium/Low.

OUTPUT JSON:
{{
    "clause_type": "Category",
    "modality": "OBLIGATION",
    "is_ambiguous": false,
    "score": 0,
    "label": "Low",
    "explanation": "Short risk summary.",
    "deviation": "None",
    "alternative_clause": "None",
    "legal_reference": "None"
}}
"#
    )
}

/// Prompt for classifying the document type.
#[must_use]
pub fn classify_document(text: &str) -> String {
    format!(
        "Classify this legal document type (e.g. Employment Agreement). Return ONLY the name. Text: {}",
        truncate_chars(text, CLASSIFY_PROMPT_LIMIT)
    )
}

/// Prompt for a 3-bullet executive summary.
#[must_use]
pub fn executive_summary(full_text: &str) -> String {
    format!(
        "Read the following contract text and provide a 3-bullet executive summary of the \
         KEY RISKS and TERMS for the signing party.\n\
         Do NOT introduce yourself. Just give the bullets.\n\n\
         CONTRACT TEXT:\n{}",
        truncate_chars(full_text, SUMMARY_PROMPT_LIMIT)
    )
}

/// Prompt for contextual Q&A over the document.
#[must_use]
pub fn answer_question(context: &str, query: &str) -> String {
    format!(
        "Context: {}\nQuery: {}\nAnswer briefly based on context.",
        truncate_chars(context, CHAT_CONTEXT_LIMIT),
        query
    )
}

/// Prompt for translating a Hindi clause to English.
#[must_use]
pub fn translate_clause(content: &str) -> String {
    format!("Translate this Hindi legal clause to English: {content}")
}
