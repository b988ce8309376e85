//! Domain model for the note core.
//!
//! # Responsibility
//! - Define the canonical `Note` record shared by store, view and
//!   persistence layers.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId`.
//! - Deletion is a hard delete; there are no tombstones.

pub mod note;
