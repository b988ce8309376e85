//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical note record and its partial-update type.
//! - Provide lifecycle helpers for creation, duplication and stamping.
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - `tags` is lowercase, deduplicated and kept in stable sorted order.
//! - `updated_at` is never earlier than `created_at`.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier for every note.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = Uuid;

/// Title given to copies of a note whose source title is empty.
const UNTITLED_COPY_TITLE: &str = "Untitled note (copy)";

/// Canonical note record.
///
/// Field names are renamed to camelCase on the wire so persisted payloads
/// stay compatible with the v1 slot layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Stable global ID, immutable after creation.
    pub id: NoteId,
    /// Display title; may be empty.
    pub title: String,
    /// Free-form body text; may be empty.
    pub content: String,
    /// Lowercase tag set in sorted order. Union of manual tags and
    /// hashtags extracted from `content`.
    pub tags: Vec<String>,
    /// Pinned notes sort before unpinned ones in derived views.
    pub pinned: bool,
    /// Unix epoch milliseconds, set once at creation.
    pub created_at: i64,
    /// Unix epoch milliseconds, stamped on every mutation.
    pub updated_at: i64,
}

/// Partial update applied to an existing note.
///
/// `None` fields are left untouched. A supplied `tags` list replaces the
/// manual tag set before hashtag re-extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl Note {
    /// Creates an empty, unpinned note with a fresh ID and both timestamps
    /// set to now.
    pub fn new() -> Self {
        let now = now_ms();
        Self {
            id: Uuid::new_v4(),
            title: String::new(),
            content: String::new(),
            tags: Vec::new(),
            pinned: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Builds a copy of `source` with a fresh identity.
    ///
    /// The copy keeps content and tags, suffixes the title with " (copy)"
    /// (or uses a placeholder when the source title is empty), and always
    /// starts unpinned with fresh timestamps.
    pub fn duplicate_of(source: &Note) -> Self {
        let now = now_ms();
        let title = if source.title.is_empty() {
            UNTITLED_COPY_TITLE.to_string()
        } else {
            format!("{} (copy)", source.title)
        };
        Self {
            id: Uuid::new_v4(),
            title,
            content: source.content.clone(),
            tags: source.tags.clone(),
            pinned: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Stamps `updated_at` with the current time.
    ///
    /// Clamped so `updated_at >= created_at` holds even when the wall clock
    /// steps backwards between creation and mutation.
    pub fn touch(&mut self) {
        self.updated_at = now_ms().max(self.created_at);
    }
}

impl Default for Note {
    fn default() -> Self {
        Self::new()
    }
}

/// Current wall-clock time in Unix epoch milliseconds.
pub fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as i64)
}
