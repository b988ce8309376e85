//! Note collection and selection state.
//!
//! # Responsibility
//! - Provide create/update/remove/duplicate/toggle-pin/select operations.
//! - Recompute derived tags on every content mutation.
//!
//! # Invariants
//! - After `update`, `tags` is the union of the effective manual tag list
//!   and the hashtags extracted from `content`.
//! - Operations on unknown ids are silent no-ops; stale UI references must
//!   not surface as errors.
//! - Removal is permanent; there is no tombstone state.

use crate::model::note::{Note, NoteId, NotePatch};
use crate::tags::{extract, normalize_tags};
use log::debug;
use std::collections::BTreeSet;

/// Sole authority over the ordered note collection and the selection.
///
/// Purely in-memory; persistence side effects are orchestrated by the
/// workspace layer on top of the `bool`/`Option` outcomes returned here.
#[derive(Debug, Default)]
pub struct NoteStore {
    notes: Vec<Note>,
    selected: Option<NoteId>,
}

impl NoteStore {
    /// Creates an empty store with no selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a store from persisted state.
    ///
    /// The selection is routed through `select`, so a stale id that no
    /// longer matches a note degrades to "no selection" instead of failing.
    pub fn from_parts(notes: Vec<Note>, selected: Option<NoteId>) -> Self {
        let mut store = Self {
            notes,
            selected: None,
        };
        store.select(selected);
        store
    }

    /// Live notes in stable storage order (newest first).
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Currently selected note id, if any.
    pub fn selected_id(&self) -> Option<NoteId> {
        self.selected
    }

    /// Currently selected note, if any.
    pub fn selected_note(&self) -> Option<&Note> {
        self.selected.and_then(|id| self.get(id))
    }

    /// Looks up one note by id.
    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Creates a fresh empty note, prepends it and selects it.
    pub fn create(&mut self) -> NoteId {
        let note = Note::new();
        let id = note.id;
        self.notes.insert(0, note);
        self.selected = Some(id);
        debug!("event=note_create module=store status=ok id={id}");
        id
    }

    /// Merges a partial update into the note with `id`.
    ///
    /// Recomputes `tags` as the union of the effective manual tag list (the
    /// supplied list when present, otherwise the prior tag set) and the
    /// hashtags extracted from the resulting content, then stamps
    /// `updated_at`. Returns `false` without touching state when the id is
    /// unknown.
    pub fn update(&mut self, id: NoteId, patch: NotePatch) -> bool {
        let Some(note) = self.notes.iter_mut().find(|note| note.id == id) else {
            debug!("event=note_update module=store status=skipped reason=not_found id={id}");
            return false;
        };

        if let Some(title) = patch.title {
            note.title = title;
        }
        if let Some(content) = patch.content {
            note.content = content;
        }

        let manual = match patch.tags {
            Some(supplied) => normalize_tags(&supplied),
            None => note.tags.clone(),
        };
        let mut merged: BTreeSet<String> = manual.into_iter().collect();
        merged.extend(extract(&note.content));
        note.tags = merged.into_iter().collect();
        note.touch();
        true
    }

    /// Removes the note with `id`. Returns whether a removal occurred.
    ///
    /// Confirmation is an external collaborator concern; callers only invoke
    /// this after the user confirmed. When the removed note was selected the
    /// selection is cleared here; picking a successor is view-order dependent
    /// and handled by the workspace layer.
    pub fn remove(&mut self, id: NoteId) -> bool {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        let removed = self.notes.len() < before;
        if removed {
            debug!("event=note_remove module=store status=ok id={id}");
            if self.selected == Some(id) {
                self.selected = None;
            }
        }
        removed
    }

    /// Flips the pinned flag and stamps `updated_at`; no-op for unknown ids.
    pub fn toggle_pin(&mut self, id: NoteId) -> bool {
        let Some(note) = self.notes.iter_mut().find(|note| note.id == id) else {
            return false;
        };
        note.pinned = !note.pinned;
        note.touch();
        true
    }

    /// Duplicates the note with `id`, prepending and selecting the copy.
    ///
    /// Returns the new id, or `None` when the source does not exist.
    pub fn duplicate(&mut self, id: NoteId) -> Option<NoteId> {
        let source = self.get(id)?;
        let copy = Note::duplicate_of(source);
        let copy_id = copy.id;
        self.notes.insert(0, copy);
        self.selected = Some(copy_id);
        debug!("event=note_duplicate module=store status=ok source={id} copy={copy_id}");
        Some(copy_id)
    }

    /// Sets or clears the selection.
    ///
    /// `Some(id)` only takes effect when the note exists; stale ids are
    /// silently ignored so in-flight UI commands racing a delete stay
    /// harmless. `None` always clears.
    pub fn select(&mut self, id: Option<NoteId>) {
        match id {
            Some(id) if self.get(id).is_some() => self.selected = Some(id),
            Some(_) => {}
            None => self.selected = None,
        }
    }
}
