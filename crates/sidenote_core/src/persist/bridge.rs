//! Debounced write-through between the note store and the slot store.
//!
//! # Responsibility
//! - Restore persisted notes and selection on startup, tolerating corrupt
//!   or missing payloads.
//! - Coalesce rapid note changes into one write per quiet period.
//! - Persist selection changes immediately.
//!
//! # Invariants
//! - A snapshot arriving inside the debounce window supersedes the pending
//!   one; only the most recent state is ever written.
//! - Write failures are logged and swallowed, never retried or surfaced.
//! - Dropping the bridge cancels a pending write without a final flush;
//!   the acceptable loss window is bounded by the debounce interval.

use super::codec;
use super::kv::KeyValueStore;
use crate::model::note::{Note, NoteId};
use log::warn;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;
use uuid::Uuid;

/// Slot holding the serialized note sequence.
pub const NOTES_SLOT: &str = "notes.v1";
/// Slot holding the last-selected note id.
pub const SELECTED_SLOT: &str = "notes.selectedId";
/// Quiet period before a scheduled snapshot is written.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(200);

enum Command {
    Save(String),
    Shutdown,
}

/// Debounced serializer of note state into a key-value store.
///
/// Snapshots are encoded on the caller thread and handed to a worker that
/// waits out the debounce window before writing, restarting the wait
/// whenever a newer snapshot arrives.
pub struct PersistenceBridge {
    store: Arc<dyn KeyValueStore>,
    tx: Sender<Command>,
    worker: Option<JoinHandle<()>>,
}

impl PersistenceBridge {
    /// Creates a bridge with the default debounce window.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_debounce(store, DEFAULT_DEBOUNCE)
    }

    /// Creates a bridge with a custom debounce window.
    pub fn with_debounce(store: Arc<dyn KeyValueStore>, debounce: Duration) -> Self {
        let (tx, rx) = mpsc::channel::<Command>();
        let worker_store = Arc::clone(&store);
        let worker = std::thread::spawn(move || {
            let mut pending: Option<String> = None;
            loop {
                let command = if pending.is_some() {
                    match rx.recv_timeout(debounce) {
                        Ok(command) => command,
                        Err(RecvTimeoutError::Timeout) => {
                            if let Some(payload) = pending.take() {
                                write_notes(worker_store.as_ref(), &payload);
                            }
                            continue;
                        }
                        Err(RecvTimeoutError::Disconnected) => break,
                    }
                } else {
                    match rx.recv() {
                        Ok(command) => command,
                        Err(_) => break,
                    }
                };
                match command {
                    Command::Save(payload) => pending = Some(payload),
                    Command::Shutdown => break,
                }
            }
        });
        Self {
            store,
            tx,
            worker: Some(worker),
        }
    }

    /// Restores the persisted note sequence.
    ///
    /// Absent, unreadable or malformed payloads degrade to an empty
    /// collection; loading never fails.
    pub fn load_notes(&self) -> Vec<Note> {
        let raw = match self.store.get(NOTES_SLOT) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!("event=notes_load module=persist status=error error={err}");
                return Vec::new();
            }
        };
        match codec::decode_notes(&raw) {
            Ok(notes) => notes,
            Err(err) => {
                warn!("event=notes_load module=persist status=fallback reason=malformed error={err}");
                Vec::new()
            }
        }
    }

    /// Restores the last-selected note id.
    ///
    /// The id is not validated against the collection here; the store
    /// tolerates stale selections on its own.
    pub fn load_selected(&self) -> Option<NoteId> {
        match self.store.get(SELECTED_SLOT) {
            Ok(Some(raw)) => Uuid::parse_str(raw.trim()).ok(),
            Ok(None) => None,
            Err(err) => {
                warn!("event=selection_load module=persist status=error error={err}");
                None
            }
        }
    }

    /// Schedules a debounced write of the full note sequence.
    ///
    /// Supersedes any snapshot still waiting out the quiet period.
    pub fn schedule_save(&self, notes: &[Note]) {
        let payload = match codec::encode_notes(notes) {
            Ok(payload) => payload,
            Err(err) => {
                warn!("event=notes_save module=persist status=error stage=encode error={err}");
                return;
            }
        };
        // Send only fails after the worker exited; nothing left to persist to.
        let _ = self.tx.send(Command::Save(payload));
    }

    /// Persists the selected note id immediately, without debouncing.
    ///
    /// Selection changes are low-frequency and cheap. Clearing the selection
    /// never erases the slot, so a reload can restore the last real
    /// selection.
    pub fn persist_selected(&self, id: NoteId) {
        if let Err(err) = self.store.set(SELECTED_SLOT, &id.to_string()) {
            warn!("event=selection_save module=persist status=error error={err}");
        }
    }
}

impl Drop for PersistenceBridge {
    fn drop(&mut self) {
        let _ = self.tx.send(Command::Shutdown);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

fn write_notes(store: &dyn KeyValueStore, payload: &str) {
    if let Err(err) = store.set(NOTES_SLOT, payload) {
        warn!("event=notes_save module=persist status=error error={err}");
    }
}
