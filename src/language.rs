//! Script detection for multilingual clauses.
//!
//! Segmentation itself is language-agnostic; the pipeline only needs to
//! know when a clause is predominantly Hindi so it can be translated
//! before annotation. A character-class check over the Devanagari block
//! is enough for that and keeps language understanding out of scope.

/// Writing script dominating a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Latin,
    Devanagari,
    Other,
}

/// Classify the dominant script of a text by counting letters per block.
#[must_use]
pub fn dominant_script(text: &str) -> Script {
    let mut latin = 0usize;
    let mut devanagari = 0usize;
    let mut other = 0usize;

    for c in text.chars().filter(|c| c.is_alphabetic()) {
        if c.is_ascii_alphabetic() {
            latin += 1;
        } else if ('\u{0900}'..='\u{097F}').contains(&c) {
            devanagari += 1;
        } else {
            other += 1;
        }
    }

    if devanagari > latin && devanagari >= other {
        Script::Devanagari
    } else if latin >= other {
        Script::Latin
    } else {
        Script::Other
    }
}

/// Whether a clause should be translated before annotation.
#[must_use]
pub fn needs_translation(text: &str) -> bool {
    dominant_script(text) == Script::Devanagari
}
