//! Core domain logic for Sidenote, a local-first note-taking library.
//! This crate is the single source of truth for note state and its
//! persistence contract; rendering and input wiring live in UI layers.

pub mod logging;
pub mod model;
pub mod persist;
pub mod service;
pub mod store;
pub mod tags;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{Note, NoteId, NotePatch};
pub use persist::bridge::{PersistenceBridge, DEFAULT_DEBOUNCE, NOTES_SLOT, SELECTED_SLOT};
pub use persist::kv::{KeyValueStore, MemoryStore, StoreError, StoreResult};
pub use persist::sqlite::SqliteStore;
pub use service::workspace::NoteWorkspace;
pub use store::note_store::NoteStore;
pub use tags::{extract, normalize_tag, normalize_tags};
pub use view::{filtered_view, visible_tags};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
