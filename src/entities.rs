//! Lightweight entity scan over the raw document text.
//!
//! Regex-only: monetary amounts, party names with corporate suffixes,
//! jurisdiction mentions and dates. Deliberately not NER — the buckets
//! feed the report header, nothing downstream reasons about them.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::types::EntitySet;

/// Minimum entity text length; shorter fragments are regex debris.
const MIN_ENTITY_LEN: usize = 3;

/// Monetary amounts: Rs./INR/rupee-sign prefixed figures or written rupees.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static MONEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:Rs\.?|INR|₹)\s*[\d,]+(?:\.\d{2})?|Rupees\s+[a-zA-Z\s]+")
        .expect("valid regex")
});

/// Party names: capitalized runs ending in a corporate suffix.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PARTY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"[A-Z][A-Za-z&.' ]{2,60}?(?:Ltd\.?|Limited|Pvt\.? Ltd\.?|Private Limited|Inc\.?|LLP|LLC|Corporation|Corp\.?)",
    )
    .expect("valid regex")
});

/// Jurisdiction mentions: "courts of X", "jurisdiction of X".
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static JURISDICTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:courts? (?:of|at|in)|exclusive jurisdiction of|jurisdiction of)\s+([A-Z][A-Za-z]+(?: [A-Z][A-Za-z]+)?)")
        .expect("valid regex")
});

/// Dates: numeric (01/04/2025, 2025-04-01) or written (1st April 2025, April 1, 2025).
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b\d{1,2}[/-]\d{1,2}[/-]\d{2,4}\b|\b\d{4}-\d{2}-\d{2}\b|\b\d{1,2}(?:st|nd|rd|th)?\s+(?:January|February|March|April|May|June|July|August|September|October|November|December),?\s+\d{4}\b|\b(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{1,2},?\s+\d{4}\b",
    )
    .expect("valid regex")
});

/// Scan document text for report-header entities.
///
/// Each bucket is deduplicated case-insensitively, preserving first
/// occurrence order.
#[must_use]
pub fn extract_entities(text: &str) -> EntitySet {
    EntitySet {
        parties: collect(&PARTY, text),
        financials: collect(&MONEY, text),
        jurisdiction: collect_group(&JURISDICTION, text),
        dates: collect(&DATE, text),
    }
}

/// Collect whole-match entities with dedup and length filtering.
fn collect(re: &Regex, text: &str) -> Vec<String> {
    dedup(re.find_iter(text).map(|m| m.as_str().trim().to_string()))
}

/// Collect first-capture-group entities with dedup and length filtering.
fn collect_group(re: &Regex, text: &str) -> Vec<String> {
    dedup(
        re.captures_iter(text)
            .filter_map(|c| c.get(1))
            .map(|m| m.as_str().trim().to_string()),
    )
}

fn dedup(items: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::new();
    for item in items {
        let key = item.to_lowercase();
        if item.chars().count() < MIN_ENTITY_LEN || seen.contains(&key) {
            continue;
        }
        seen.insert(key);
        out.push(item);
    }
    out
}
