//! Derived read views over the note collection.
//!
//! # Responsibility
//! - Compute the filtered, display-ordered note list for a query and tag
//!   filter.
//! - Compute the global set of distinct tags.
//!
//! # Invariants
//! - Pure functions over a note slice; no store state is mutated and
//!   repeated calls with the same input yield the same output.
//! - Display order is pinned-first, then `updated_at` descending, then id
//!   ascending as a deterministic tie-break.

use crate::model::note::Note;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Union of all notes' tags in lexicographic order.
///
/// Tags are already lowercase when they enter the store, so no further
/// normalization happens here.
pub fn visible_tags(notes: &[Note]) -> Vec<String> {
    let unique: BTreeSet<&str> = notes
        .iter()
        .flat_map(|note| note.tags.iter().map(String::as_str))
        .collect();
    unique.into_iter().map(str::to_string).collect()
}

/// Filtered, display-ordered view of `notes`.
///
/// A note survives when `tag_filter` is empty or contained in its tag set,
/// and when the trimmed, case-folded `query` is empty or a substring of its
/// title, content, or any tag.
pub fn filtered_view<'a>(notes: &'a [Note], query: &str, tag_filter: &str) -> Vec<&'a Note> {
    let needle = query.trim().to_lowercase();
    let mut view: Vec<&Note> = notes
        .iter()
        .filter(|note| matches_tag(note, tag_filter) && matches_query(note, &needle))
        .collect();
    view.sort_by(|a, b| display_order(a, b));
    view
}

fn matches_tag(note: &Note, tag_filter: &str) -> bool {
    tag_filter.is_empty() || note.tags.iter().any(|tag| tag == tag_filter)
}

fn matches_query(note: &Note, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    note.title.to_lowercase().contains(needle)
        || note.content.to_lowercase().contains(needle)
        || note.tags.iter().any(|tag| tag.contains(needle))
}

fn display_order(a: &Note, b: &Note) -> Ordering {
    b.pinned
        .cmp(&a.pinned)
        .then(b.updated_at.cmp(&a.updated_at))
        .then(a.id.cmp(&b.id))
}
