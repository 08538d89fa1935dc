//! Segmentation engine: marker splitting plus the header/content walk.

use super::config::create_contract_markers;
use super::marker::MarkerSet;
use super::types::{Clause, SegmentConfig, Token};

/// Clause segmenter for contract text.
///
/// Pure and stateless: the same input always yields the same clause
/// sequence, and malformed input degrades to a single whole-document
/// clause instead of an error.
pub struct Segmenter {
    markers: MarkerSet,
    config: SegmentConfig,
}

impl Segmenter {
    /// Create a segmenter with a custom marker set and configuration.
    #[must_use]
    pub fn new(markers: MarkerSet, config: SegmentConfig) -> Self {
        Self { markers, config }
    }

    /// Segment raw document text into ordered clauses.
    ///
    /// Never fails. If marker splitting finds no structure, or the walk
    /// emits nothing (every fragment under the noise threshold), the result
    /// is exactly one fallback clause covering the trimmed document.
    #[must_use]
    pub fn segment(&self, text: &str) -> Vec<Clause> {
        let tokens = self.tokenize(text);

        if tokens.len() < self.config.min_structure_tokens {
            return vec![self.fallback_clause(text)];
        }

        let clauses = self.walk(&tokens);

        // The annotation pipeline downstream needs at least one clause.
        if clauses.is_empty() {
            return vec![self.fallback_clause(text)];
        }

        clauses
    }

    /// Split text on marker matches, keeping the matches as tokens.
    ///
    /// Gaps between matches are kept even when empty so the structure
    /// check above sees the same token count a plain split would.
    #[must_use]
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();
        let mut last = 0;

        for m in self.markers.union().find_iter(text) {
            tokens.push(Token::Text(&text[last..m.start()]));

            match self.markers.classify(m.as_str()) {
                Some(kind) => tokens.push(Token::Marker(kind, m.as_str())),
                // Union and classifiers share patterns, so this only
                // happens with an inconsistent custom marker set.
                None => tokens.push(Token::Text(m.as_str())),
            }

            last = m.end();
        }
        tokens.push(Token::Text(&text[last..]));

        tokens
    }

    /// Walk the token stream with a header cursor, emitting clauses.
    ///
    /// Two transitions: a marker replaces the current header (consecutive
    /// markers overwrite, the earlier one yields no clause); qualifying
    /// content emits a clause under the current header and keeps the state.
    fn walk(&self, tokens: &[Token<'_>]) -> Vec<Clause> {
        let mut clauses = Vec::new();
        let mut current_header = self.config.preamble_label.clone();

        for token in tokens {
            match token {
                Token::Marker(kind, raw) => {
                    current_header = kind.normalize(raw);
                }
                Token::Text(raw) => {
                    let content = raw.trim();
                    if content.chars().count() > self.config.noise_threshold {
                        clauses.push(Clause::new(current_header.clone(), content));
                    }
                }
            }
        }

        clauses
    }

    /// The single whole-document clause used when no structure is found.
    fn fallback_clause(&self, text: &str) -> Clause {
        Clause::new(self.config.fallback_label.clone(), text.trim())
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new(create_contract_markers(), SegmentConfig::default())
    }
}
