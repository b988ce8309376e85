//! Note workspace facade.
//!
//! # Responsibility
//! - Expose one call per user intent over the store, view and bridge.
//! - Hold the current query and tag filter used to derive the display list.
//! - Schedule persistence after every effective mutation.
//!
//! # Invariants
//! - Note changes are persisted through the debounced bridge; selection
//!   changes to a non-empty id are persisted immediately.
//! - Deleting the selected note moves the selection to the first note of
//!   the currently derived view, or clears it when none remain.

use crate::model::note::{Note, NoteId, NotePatch};
use crate::persist::bridge::PersistenceBridge;
use crate::store::note_store::NoteStore;
use crate::view;

/// Use-case layer composing the note store with persistence and the
/// current view parameters.
///
/// Single-threaded by design: every operation runs to completion on the
/// caller's thread, and the bridge's background write is the only detached
/// effect.
pub struct NoteWorkspace {
    store: NoteStore,
    bridge: PersistenceBridge,
    query: String,
    tag_filter: String,
}

impl NoteWorkspace {
    /// Restores a workspace from the bridge's persisted slots.
    ///
    /// Missing or corrupt state degrades to an empty collection and no
    /// selection; opening never fails.
    pub fn open(bridge: PersistenceBridge) -> Self {
        let notes = bridge.load_notes();
        let selected = bridge.load_selected();
        Self {
            store: NoteStore::from_parts(notes, selected),
            bridge,
            query: String::new(),
            tag_filter: String::new(),
        }
    }

    /// Creates a fresh note, selects it, and returns its id.
    pub fn create_note(&mut self) -> NoteId {
        let id = self.store.create();
        self.bridge.persist_selected(id);
        self.save_notes();
        id
    }

    /// Applies a partial update; unknown ids are silent no-ops.
    pub fn update_note(&mut self, id: NoteId, patch: NotePatch) {
        if self.store.update(id, patch) {
            self.save_notes();
        }
    }

    /// Deletes a note, assuming the caller already obtained confirmation.
    ///
    /// Returns whether a removal occurred. When the deleted note was
    /// selected, the first note of the current filtered view (under the
    /// active query and tag filter) becomes selected.
    pub fn delete_note(&mut self, id: NoteId) -> bool {
        let was_selected = self.store.selected_id() == Some(id);
        if !self.store.remove(id) {
            return false;
        }
        if was_selected {
            let next = view::filtered_view(self.store.notes(), &self.query, &self.tag_filter)
                .first()
                .map(|note| note.id);
            self.store.select(next);
            if let Some(next) = next {
                self.bridge.persist_selected(next);
            }
        }
        self.save_notes();
        true
    }

    /// Flips a note's pinned flag; unknown ids are silent no-ops.
    pub fn toggle_pin(&mut self, id: NoteId) {
        if self.store.toggle_pin(id) {
            self.save_notes();
        }
    }

    /// Duplicates a note and selects the copy.
    ///
    /// Returns the copy's id, or `None` when the source does not exist.
    pub fn duplicate_note(&mut self, id: NoteId) -> Option<NoteId> {
        let copy_id = self.store.duplicate(id)?;
        self.bridge.persist_selected(copy_id);
        self.save_notes();
        Some(copy_id)
    }

    /// Selects a note (`Some`) or clears the selection (`None`).
    ///
    /// Stale ids are ignored. Only effective non-empty selections are
    /// persisted; clearing leaves the stored slot untouched.
    pub fn select_note(&mut self, id: Option<NoteId>) {
        self.store.select(id);
        if let Some(selected) = self.store.selected_id() {
            if Some(selected) == id {
                self.bridge.persist_selected(selected);
            }
        }
    }

    /// Sets the live search query used by `filtered_notes`.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Sets the active tag filter; an empty string clears it.
    pub fn set_tag_filter(&mut self, tag: impl Into<String>) {
        self.tag_filter = tag.into();
    }

    pub fn notes(&self) -> &[Note] {
        self.store.notes()
    }

    pub fn selected_id(&self) -> Option<NoteId> {
        self.store.selected_id()
    }

    pub fn selected_note(&self) -> Option<&Note> {
        self.store.selected_note()
    }

    /// Sorted union of all tags across the collection.
    pub fn visible_tags(&self) -> Vec<String> {
        view::visible_tags(self.store.notes())
    }

    /// Display list derived from the active query and tag filter.
    pub fn filtered_notes(&self) -> Vec<&Note> {
        view::filtered_view(self.store.notes(), &self.query, &self.tag_filter)
    }

    fn save_notes(&self) {
        self.bridge.schedule_save(self.store.notes());
    }
}
