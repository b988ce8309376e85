//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `sidenote_core` linkage.
//! - Exercise one full create/update/view cycle over an in-memory store.

use sidenote_core::{MemoryStore, NotePatch, NoteWorkspace, PersistenceBridge};
use std::sync::Arc;

fn main() {
    println!("sidenote_core version={}", sidenote_core::core_version());

    let bridge = PersistenceBridge::new(Arc::new(MemoryStore::new()));
    let mut workspace = NoteWorkspace::open(bridge);
    let id = workspace.create_note();
    workspace.update_note(
        id,
        NotePatch {
            title: Some("smoke".to_string()),
            content: Some("probe body with #smoke marker".to_string()),
            ..NotePatch::default()
        },
    );

    println!("notes={}", workspace.notes().len());
    println!("tags={}", workspace.visible_tags().join(","));
}
