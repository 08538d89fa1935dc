//! Text cleanup and wrapping for report output.

use std::sync::LazyLock;

use regex::Regex;
use textwrap::{fill, Options};
use unicode_normalization::UnicodeNormalization;

use crate::config::TEXT_WRAP_WIDTH;

/// Runs of whitespace (including newlines) collapsed during cleanup.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Characters with a fixed ASCII replacement.
///
/// Covers the smart punctuation and currency signs that show up in
/// extracted contract text; anything else non-ASCII is dropped after
/// NFKD decomposition.
const REPLACEMENTS: [(char, &str); 9] = [
    ('\u{2018}', "'"),
    ('\u{2019}', "'"),
    ('\u{201c}', "\""),
    ('\u{201d}', "\""),
    ('\u{2013}', "-"),
    ('\u{2014}', "-"),
    ('\u{20b9}', "Rs. "),
    ('\u{00a0}', " "),
    ('\t', " "),
];

/// Clean text for portable ASCII report output.
///
/// Smart punctuation is mapped to ASCII, remaining characters are NFKD
/// decomposed so accented letters keep their base letter, anything still
/// non-ASCII is dropped, and whitespace is collapsed. Empty input becomes
/// "N/A" so report fields are never blank.
#[must_use]
pub fn clean_text(text: &str) -> String {
    let mut replaced = String::with_capacity(text.len());
    for c in text.chars() {
        match REPLACEMENTS.iter().find(|(from, _)| *from == c) {
            Some((_, to)) => replaced.push_str(to),
            None => replaced.push(c),
        }
    }

    let ascii: String = replaced.nfkd().filter(char::is_ascii).collect();
    let collapsed = WHITESPACE_RUN.replace_all(&ascii, " ");
    let trimmed = collapsed.trim();

    if trimmed.is_empty() {
        "N/A".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Wrap text at the report width, preserving paragraph breaks.
#[must_use]
pub fn wrap_text(text: &str) -> String {
    let options = Options::new(TEXT_WRAP_WIDTH);
    text.split("\n\n")
        .map(|p| fill(p, &options))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_clean_text_smart_quotes() {
        assert_eq!(
            clean_text("\u{201c}sole discretion\u{201d} of the \u{2018}Company\u{2019}"),
            "\"sole discretion\" of the 'Company'"
        );
    }

    #[test]
    fn test_clean_text_dashes_and_currency() {
        assert_eq!(
            clean_text("fee \u{2013} \u{20b9}50,000 \u{2014} monthly"),
            "fee - Rs. 50,000 - monthly"
        );
    }

    #[test]
    fn test_clean_text_strips_non_ascii() {
        assert_eq!(clean_text("penalty \u{26a0} applies"), "penalty applies");
    }

    #[test]
    fn test_clean_text_accents_keep_base_letter() {
        assert_eq!(clean_text("café"), "cafe");
    }

    #[test]
    fn test_clean_text_collapses_whitespace() {
        assert_eq!(clean_text("a  b\n\nc\td"), "a b c d");
    }

    #[test]
    fn test_clean_text_empty_becomes_na() {
        assert_eq!(clean_text(""), "N/A");
        assert_eq!(clean_text("  \n "), "N/A");
        assert_eq!(clean_text("\u{26a0}"), "N/A");
    }

    #[test]
    fn test_wrap_text_preserves_paragraphs() {
        let text = "First paragraph.\n\nSecond paragraph.";
        assert_eq!(wrap_text(text), text);
    }

    #[test]
    fn test_wrap_text_wraps_long_lines() {
        let text = "word ".repeat(40);
        let wrapped = wrap_text(text.trim());
        assert!(wrapped.lines().all(|l| l.len() <= TEXT_WRAP_WIDTH));
        assert!(wrapped.contains('\n'));
    }
}
