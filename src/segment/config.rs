//! Marker set definition for contract documents.

use super::marker::{MarkerKind, MarkerSet, MarkerSpec};

/// Create the marker set for contract-style legal documents.
///
/// Order matters twice: the union alternation prefers earlier patterns at
/// the same position, and classification takes the first matching kind.
/// `Numbered` must precede `SubClause` so "1. Definitions" is not read as
/// the dotted form, while "1.1" falls through to `SubClause`.
#[must_use]
pub fn create_contract_markers() -> MarkerSet {
    let specs = [
        MarkerSpec::new(MarkerKind::Numbered, r"\d+\.\s+[A-Za-z]+"),
        MarkerSpec::new(MarkerKind::Article, r"ARTICLE\s+[IVX0-9]+"),
        MarkerSpec::new(MarkerKind::SubClause, r"\([a-z0-9]+\)|[0-9]+\.[0-9]+"),
        MarkerSpec::new(
            MarkerKind::Keyword,
            r"WHEREAS|NOW THEREFORE|IN WITNESS|DEFINITIONS|[A-Z\s]{5,}:",
        ),
    ];

    #[allow(clippy::expect_used)] // Static patterns that are guaranteed to be valid
    MarkerSet::compile(&specs).expect("valid marker patterns")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_matches_at_line_start_only() {
        let markers = create_contract_markers();
        // Marker at start of text
        assert!(markers.union().is_match("1. Definitions"));
        // Marker after newline
        assert!(markers.union().is_match("intro text\n2. Term"));
        // Mid-line number is not a marker boundary
        assert!(!markers.union().is_match("see clause 3. above"));
    }

    #[test]
    fn test_union_priority_numbered_over_sub_clause() {
        let markers = create_contract_markers();
        let m = markers.union().find("1. Definitions\n").map(|m| m.as_str());
        assert_eq!(m, Some("1. Definitions"));
    }

    #[test]
    fn test_union_dotted_numbering() {
        let markers = create_contract_markers();
        let m = markers.union().find("\n1.1 The term").map(|m| m.as_str());
        assert_eq!(m, Some("\n1.1"));
    }
}
