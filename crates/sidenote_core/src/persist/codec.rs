//! JSON codec for the persisted note sequence.
//!
//! # Responsibility
//! - Encode the full note collection into the v1 slot payload.
//! - Decode persisted payloads back into notes.
//!
//! # Invariants
//! - The wire shape is a JSON array of note records with camelCase field
//!   names (`id, title, content, tags, pinned, createdAt, updatedAt`).
//! - Decoding is strict here; tolerating malformed payloads is the
//!   bridge's job.

use crate::model::note::Note;

/// Serializes the full collection into the v1 payload string.
pub fn encode_notes(notes: &[Note]) -> Result<String, serde_json::Error> {
    serde_json::to_string(notes)
}

/// Parses a v1 payload back into a note sequence.
pub fn decode_notes(raw: &str) -> Result<Vec<Note>, serde_json::Error> {
    serde_json::from_str(raw)
}
