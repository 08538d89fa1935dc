//! Types for the clause segmentation system.

use serde::{Deserialize, Serialize};

use crate::config::{FALLBACK_LABEL, MIN_STRUCTURE_TOKENS, NOISE_THRESHOLD, PREAMBLE_LABEL};

use super::marker::MarkerKind;

/// A contiguous span of contract text addressed under one heading.
///
/// Produced once per document, in document order, and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clause {
    /// Detected marker text or a synthesized label.
    pub header: String,

    /// Trimmed clause body.
    pub content: String,
}

impl Clause {
    /// Create a new clause.
    #[must_use]
    pub fn new(header: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            content: content.into(),
        }
    }
}

/// One token of the marker-split document.
///
/// The tokenizer splits on marker matches while keeping the matches
/// themselves, so the stream alternates between text gaps and markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    /// A recognized clause marker, with its kind and raw matched text.
    Marker(MarkerKind, &'a str),

    /// Text between markers.
    Text(&'a str),
}

/// Tunables for the segmentation walk.
#[derive(Debug, Clone)]
pub struct SegmentConfig {
    /// Content at or below this trimmed length is dropped as noise.
    pub noise_threshold: usize,

    /// Fewer split tokens than this means no structure was detected.
    pub min_structure_tokens: usize,

    /// Header for content before the first marker.
    pub preamble_label: String,

    /// Header for the whole-document fallback clause.
    pub fallback_label: String,
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            noise_threshold: NOISE_THRESHOLD,
            min_structure_tokens: MIN_STRUCTURE_TOKENS,
            preamble_label: PREAMBLE_LABEL.to_string(),
            fallback_label: FALLBACK_LABEL.to_string(),
        }
    }
}
