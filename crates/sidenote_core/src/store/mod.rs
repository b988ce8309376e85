//! In-memory state authority for notes.
//!
//! # Responsibility
//! - Own the live note collection and the selection state.
//! - Route every mutation through one place so invariants hold.
//!
//! # Invariants
//! - Note ids are unique across the live collection.
//! - The selection always references a live note or is empty.

pub mod note_store;
