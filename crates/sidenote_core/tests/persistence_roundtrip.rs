use sidenote_core::{
    KeyValueStore, NotePatch, NoteWorkspace, PersistenceBridge, SqliteStore, NOTES_SLOT,
    SELECTED_SLOT,
};
use std::sync::Arc;
use std::time::Duration;

const TEST_DEBOUNCE: Duration = Duration::from_millis(60);

#[test]
fn workspace_state_round_trips_through_a_sqlite_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sidenote.db");

    let (pinned_id, plain_id) = {
        let store = Arc::new(SqliteStore::open(&path).unwrap());
        let bridge = PersistenceBridge::with_debounce(store, TEST_DEBOUNCE);
        let mut workspace = NoteWorkspace::open(bridge);

        let pinned = workspace.create_note();
        workspace.update_note(
            pinned,
            NotePatch {
                title: Some("Roadmap".to_string()),
                content: Some("targets for #q3 #Q3".to_string()),
                tags: Some(vec!["Planning".to_string()]),
                ..NotePatch::default()
            },
        );
        workspace.toggle_pin(pinned);
        let plain = workspace.create_note();
        workspace.select_note(Some(pinned));
        std::thread::sleep(Duration::from_millis(400));
        (pinned, plain)
    };

    let store = Arc::new(SqliteStore::open(&path).unwrap());
    let bridge = PersistenceBridge::with_debounce(store, TEST_DEBOUNCE);
    let reopened = NoteWorkspace::open(bridge);

    assert_eq!(reopened.notes().len(), 2);
    assert_eq!(reopened.selected_id(), Some(pinned_id));
    let pinned = reopened.notes().iter().find(|n| n.id == pinned_id).unwrap();
    assert_eq!(pinned.title, "Roadmap");
    assert_eq!(pinned.tags, vec!["planning", "q3"]);
    assert!(pinned.pinned);
    assert!(pinned.updated_at >= pinned.created_at);
    assert!(reopened.notes().iter().any(|n| n.id == plain_id));
}

#[test]
fn corrupt_slots_degrade_to_an_empty_workspace() {
    let store: Arc<dyn KeyValueStore> = Arc::new(SqliteStore::open_in_memory().unwrap());
    store.set(NOTES_SLOT, "]]not json[[").unwrap();
    store.set(SELECTED_SLOT, "definitely-not-a-uuid").unwrap();

    let bridge = PersistenceBridge::with_debounce(store, TEST_DEBOUNCE);
    let workspace = NoteWorkspace::open(bridge);
    assert!(workspace.notes().is_empty());
    assert_eq!(workspace.selected_id(), None);
}

#[test]
fn stale_persisted_selection_is_tolerated_on_open() {
    let store: Arc<dyn KeyValueStore> = Arc::new(SqliteStore::open_in_memory().unwrap());
    store.set(NOTES_SLOT, "[]").unwrap();
    store
        .set(SELECTED_SLOT, &uuid::Uuid::new_v4().to_string())
        .unwrap();

    let bridge = PersistenceBridge::with_debounce(store, TEST_DEBOUNCE);
    let workspace = NoteWorkspace::open(bridge);
    assert_eq!(workspace.selected_id(), None);
}
