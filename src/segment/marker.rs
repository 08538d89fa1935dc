//! Marker kinds and the compiled marker set.
//!
//! Each marker kind carries its own pattern and normalization rule, so new
//! kinds can be added without touching the walk logic.

use regex::Regex;

use crate::config::RECITAL_LABEL;

/// Kinds of clause markers recognized in contract text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// Numbered heading: `1.` followed by a word ("1. Definitions").
    Numbered,

    /// Article heading with Roman or decimal numbering ("ARTICLE IV").
    Article,

    /// Sub-clause marker: `(a)`, `(iv)` or dotted numbering `1.1`.
    SubClause,

    /// Boilerplate keyword (WHEREAS, NOW THEREFORE, ...) or an
    /// all-caps heading ending in a colon.
    Keyword,
}

impl MarkerKind {
    /// Normalize a raw marker match into a header label.
    ///
    /// Keyword recitals collapse to a fixed label so all WHEREAS variants
    /// group under one heading downstream.
    #[must_use]
    pub fn normalize(self, raw: &str) -> String {
        let trimmed = raw.trim();
        match self {
            Self::Keyword if trimmed.to_uppercase().contains("WHEREAS") => {
                RECITAL_LABEL.to_string()
            }
            _ => trimmed.to_string(),
        }
    }
}

/// A marker kind paired with its (un-anchored) pattern.
#[derive(Debug, Clone)]
pub struct MarkerSpec {
    pub kind: MarkerKind,
    pub pattern: String,
}

impl MarkerSpec {
    /// Create a new marker specification.
    #[must_use]
    pub fn new(kind: MarkerKind, pattern: impl Into<String>) -> Self {
        Self {
            kind,
            pattern: pattern.into(),
        }
    }
}

/// Compiled union of marker specifications.
///
/// Holds one anchored classifier per kind (in priority order) plus the
/// union pattern used to split the document. Markers are only recognized
/// at a line boundary.
pub struct MarkerSet {
    classifiers: Vec<(MarkerKind, Regex)>,
    union: Regex,
}

impl MarkerSet {
    /// Compile a marker set from specifications.
    ///
    /// Specification order is priority order: the first classifier whose
    /// pattern matches the start of a token decides the kind.
    pub fn compile(specs: &[MarkerSpec]) -> Result<Self, regex::Error> {
        let mut classifiers = Vec::with_capacity(specs.len());
        for spec in specs {
            let anchored = Regex::new(&format!("^(?:{})", spec.pattern))?;
            classifiers.push((spec.kind, anchored));
        }

        let alternatives: Vec<&str> = specs.iter().map(|s| s.pattern.as_str()).collect();
        let union = Regex::new(&format!(r"(?:\n|^)\s*(?:{})", alternatives.join("|")))?;

        Ok(Self { classifiers, union })
    }

    /// The union regex used for splitting the document text.
    #[must_use]
    pub fn union(&self) -> &Regex {
        &self.union
    }

    /// Classify a token by its marker kind, if any.
    ///
    /// The token is trimmed first since split matches carry the leading
    /// line break and indentation.
    #[must_use]
    pub fn classify(&self, token: &str) -> Option<MarkerKind> {
        let trimmed = token.trim_start();
        self.classifiers
            .iter()
            .find(|(_, re)| re.is_match(trimmed))
            .map(|(kind, _)| *kind)
    }
}
