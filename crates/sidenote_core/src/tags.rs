//! Hashtag extraction and tag normalization.
//!
//! # Responsibility
//! - Extract `#token` markers from free text into a lowercase tag set.
//! - Normalize user-supplied tag lists before they enter the store.
//!
//! # Invariants
//! - A `#` only starts a tag at the beginning of the text or after
//!   whitespace; `#b` inside `a#b` is not a tag.
//! - Extraction is pure and deterministic; empty input yields an empty set.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

static HASHTAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|\s)#([\p{L}\p{N}_-]+)").expect("valid hashtag regex"));

/// Extracts the set of hashtag tokens from `text`.
///
/// Tokens are one or more Unicode letters/digits/underscore/hyphen following
/// a boundary-anchored `#`. The `#` itself is excluded and tokens are
/// lowercased, so duplicate and differently-cased markers collapse into one
/// entry.
pub fn extract(text: &str) -> BTreeSet<String> {
    HASHTAG_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|token| token.as_str().to_lowercase())
        .collect()
}

/// Normalizes one tag value: trimmed and lowercased, or `None` when blank.
pub fn normalize_tag(tag: &str) -> Option<String> {
    let trimmed = tag.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Normalizes a tag list: blanks dropped, lowercased, deduplicated, sorted.
pub fn normalize_tags(tags: &[String]) -> Vec<String> {
    let mut unique = BTreeSet::new();
    for tag in tags {
        if let Some(value) = normalize_tag(tag) {
            unique.insert(value);
        }
    }
    unique.into_iter().collect()
}
