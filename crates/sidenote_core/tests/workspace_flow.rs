use sidenote_core::{
    KeyValueStore, MemoryStore, NotePatch, NoteWorkspace, PersistenceBridge, NOTES_SLOT,
};
use std::sync::Arc;
use std::time::Duration;

const TEST_DEBOUNCE: Duration = Duration::from_millis(60);

fn workspace_over(store: &MemoryStore) -> NoteWorkspace {
    let bridge = PersistenceBridge::with_debounce(Arc::new(store.clone()), TEST_DEBOUNCE);
    NoteWorkspace::open(bridge)
}

fn titled_patch(title: &str) -> NotePatch {
    NotePatch {
        title: Some(title.to_string()),
        ..NotePatch::default()
    }
}

#[test]
fn deleting_selected_note_selects_first_of_display_order() {
    let store = MemoryStore::new();
    let mut workspace = workspace_over(&store);

    let a = workspace.create_note();
    workspace.update_note(a, titled_patch("a"));
    let b = workspace.create_note();
    workspace.update_note(b, titled_patch("b"));
    let c = workspace.create_note();
    workspace.update_note(c, titled_patch("c"));

    // Pinning pushes `a` to the top of the derived view even though `b`
    // and `c` were updated later.
    workspace.toggle_pin(a);
    workspace.select_note(Some(c));
    assert!(workspace.delete_note(c));

    assert_eq!(workspace.selected_id(), Some(a));
}

#[test]
fn delete_fallback_honors_the_active_tag_filter() {
    let store = MemoryStore::new();
    let mut workspace = workspace_over(&store);

    let a = workspace.create_note();
    workspace.toggle_pin(a);
    let b = workspace.create_note();
    workspace.update_note(
        b,
        NotePatch {
            tags: Some(vec!["keep".to_string()]),
            ..NotePatch::default()
        },
    );
    let c = workspace.create_note();

    workspace.set_tag_filter("keep");
    workspace.select_note(Some(c));
    assert!(workspace.delete_note(c));

    // Within the filtered view only `b` is visible, so the pinned `a`
    // cannot win the fallback.
    assert_eq!(workspace.selected_id(), Some(b));
}

#[test]
fn deleting_the_last_note_clears_the_selection() {
    let store = MemoryStore::new();
    let mut workspace = workspace_over(&store);
    let only = workspace.create_note();

    assert!(workspace.delete_note(only));
    assert_eq!(workspace.selected_id(), None);
    assert!(workspace.notes().is_empty());
}

#[test]
fn delete_of_unknown_id_changes_nothing() {
    let store = MemoryStore::new();
    let mut workspace = workspace_over(&store);
    let id = workspace.create_note();

    assert!(!workspace.delete_note(uuid::Uuid::new_v4()));
    assert_eq!(workspace.notes().len(), 1);
    assert_eq!(workspace.selected_id(), Some(id));
}

#[test]
fn rapid_updates_coalesce_into_one_notes_write() {
    let store = MemoryStore::new();
    let mut workspace = workspace_over(&store);
    let id = workspace.create_note();
    let writes_after_create = store.write_count();

    workspace.update_note(id, titled_patch("one"));
    workspace.update_note(id, titled_patch("two"));
    workspace.update_note(id, titled_patch("three"));
    std::thread::sleep(Duration::from_millis(400));

    // Create plus three updates inside one quiet period: one notes write.
    assert_eq!(store.write_count() - writes_after_create, 1);
    let payload = store.get(NOTES_SLOT).unwrap().unwrap();
    assert!(payload.contains("three"));
    assert!(!payload.contains("\"one\""));
}

#[test]
fn reopened_workspace_restores_notes_and_selection() {
    let store = MemoryStore::new();
    let (first, second) = {
        let mut workspace = workspace_over(&store);
        let first = workspace.create_note();
        workspace.update_note(
            first,
            NotePatch {
                title: Some("pinned plans".to_string()),
                content: Some("remember #q3".to_string()),
                ..NotePatch::default()
            },
        );
        workspace.toggle_pin(first);
        let second = workspace.create_note();
        workspace.select_note(Some(first));
        std::thread::sleep(Duration::from_millis(400));
        (first, second)
    };

    let reopened = workspace_over(&store);
    assert_eq!(reopened.notes().len(), 2);
    assert_eq!(reopened.selected_id(), Some(first));
    let restored = reopened.notes().iter().find(|n| n.id == first).unwrap();
    assert!(restored.pinned);
    assert_eq!(restored.tags, vec!["q3".to_string()]);
    assert!(reopened.notes().iter().any(|n| n.id == second));
}

#[test]
fn filtered_notes_and_visible_tags_follow_live_state() {
    let store = MemoryStore::new();
    let mut workspace = workspace_over(&store);

    let meeting = workspace.create_note();
    workspace.update_note(
        meeting,
        NotePatch {
            title: Some("Standup".to_string()),
            content: Some("notes for #work".to_string()),
            ..NotePatch::default()
        },
    );
    let recipe = workspace.create_note();
    workspace.update_note(
        recipe,
        NotePatch {
            title: Some("Pancakes".to_string()),
            content: Some("weekend #home cooking".to_string()),
            ..NotePatch::default()
        },
    );

    assert_eq!(workspace.visible_tags(), vec!["home", "work"]);

    workspace.set_query("pancakes");
    let view = workspace.filtered_notes();
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].id, recipe);

    workspace.set_query("");
    workspace.set_tag_filter("work");
    let view = workspace.filtered_notes();
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].id, meeting);
}
