use rstatusboard::core::StatusStore;
use rstatusboard::errors::AppError;
use std::cell::{Cell, RefCell};
use std::fs;
use std::rc::Rc;
use tempfile::tempdir;

mod common;
use common::{dt, empty_status_file, status, status_file};

/// Subscribe a counter and return it
fn count_notifications(store: &mut StatusStore) -> Rc<Cell<usize>> {
    let hits = Rc::new(Cell::new(0));
    let h = hits.clone();
    store.subscribe(move |_| h.set(h.get() + 1));
    hits
}

#[test]
fn test_load_empty_document() {
    let dir = tempdir().unwrap();
    let path = empty_status_file(dir.path());

    let mut store = StatusStore::new();
    store.load(&path).unwrap();

    let now = dt("2026-02-11T12:00:00");
    assert!(store.all().is_empty());
    assert!(store.active(now).is_empty());
    assert!(store.expired(now).is_empty());
    assert_eq!(store.path(), Some(path.as_path()));
}

#[test]
fn test_active_then_expired() {
    let mut store = StatusStore::new();
    store
        .add(status("😀", "Work", "2026-02-11T09:00:00", 8))
        .unwrap();

    let noon = dt("2026-02-11T12:00:00");
    assert_eq!(store.active(noon).len(), 1);
    assert!(store.expired(noon).is_empty());

    let evening = dt("2026-02-11T18:00:00");
    assert!(store.active(evening).is_empty());
    assert_eq!(store.expired(evening).len(), 1);
    assert_eq!(store.expired(evening)[0].description(), "Work");
}

#[test]
fn test_queries_preserve_order_and_skip_upcoming() {
    let mut store = StatusStore::new();
    store.add(status("1️⃣", "First", "2026-02-11T08:00:00", 8)).unwrap();
    store.add(status("⏭️", "Later", "2026-02-12T08:00:00", 2)).unwrap();
    store.add(status("2️⃣", "Second", "2026-02-11T10:00:00", 4)).unwrap();
    store.add(status("⌛", "Old", "2026-02-10T08:00:00", 1)).unwrap();

    let now = dt("2026-02-11T11:00:00");
    let active: Vec<_> = store.active(now).iter().map(|s| s.description()).collect();
    let expired: Vec<_> = store.expired(now).iter().map(|s| s.description()).collect();

    assert_eq!(active, ["First", "Second"]);
    assert_eq!(expired, ["Old"]);
    assert_eq!(store.all().len(), 4);
}

#[test]
fn test_remove_middle_shifts_following() {
    let mut store = StatusStore::new();
    let a = status("🅰️", "A", "2026-02-11T09:00:00", 1);
    let b = status("🅱️", "B", "2026-02-11T10:00:00", 1);
    let c = status("©️", "C", "2026-02-11T11:00:00", 1);
    store.add(a.clone()).unwrap();
    store.add(b).unwrap();
    store.add(c.clone()).unwrap();

    assert!(store.remove(1).unwrap());
    assert_eq!(store.all(), [a, c]);
}

#[test]
fn test_remove_out_of_range_is_noop() {
    let dir = tempdir().unwrap();
    let path = empty_status_file(dir.path());

    let mut store = StatusStore::new();
    store.load(&path).unwrap();
    store.add(status("😀", "Work", "2026-02-11T09:00:00", 8)).unwrap();
    let before = store.all().to_vec();
    let on_disk = fs::read_to_string(&path).unwrap();

    let hits = count_notifications(&mut store);
    assert!(!store.remove(1).unwrap());
    assert!(!store.remove(usize::MAX).unwrap());

    assert_eq!(hits.get(), 0);
    assert_eq!(store.all(), before.as_slice());
    assert_eq!(fs::read_to_string(&path).unwrap(), on_disk);
}

#[test]
fn test_clear_always_notifies() {
    let mut store = StatusStore::new();
    let hits = count_notifications(&mut store);

    store.clear().unwrap();
    assert_eq!(hits.get(), 1);

    store.add(status("😀", "Work", "2026-02-11T09:00:00", 8)).unwrap();
    store.clear().unwrap();
    assert_eq!(hits.get(), 3);
    assert!(store.is_empty());
}

#[test]
fn test_save_then_load_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("board.json");

    let mut store = StatusStore::new();
    store.add(status("😀", "Work", "2026-02-11T09:00:00", 8)).unwrap();
    store.add(status("🌙", "Night", "2026-02-11T20:00:00", 8)).unwrap();
    store.add(status("📚", "Study \"quotes\"", "2026-03-01T07:30:00", 168)).unwrap();
    store.save(&path).unwrap();

    let mut reloaded = StatusStore::new();
    reloaded.load(&path).unwrap();
    assert_eq!(reloaded.all(), store.all());
}

#[test]
fn test_save_writes_indented_new_format() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("board.json");

    let mut store = StatusStore::new();
    store.add(status("😀", "Work", "2026-02-11T09:00:00", 8)).unwrap();
    store.save(&path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("\n  \"statuses\": ["));
    assert!(text.contains("\"startDateTime\": \"2026-02-11T09:00:00\""));
    assert!(text.contains("\"durationHours\": 8"));

    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["statuses"][0]["icon"], "😀");
    assert_eq!(json["statuses"][0]["description"], "Work");
}

#[test]
fn test_save_does_not_notify() {
    let dir = tempdir().unwrap();
    let mut store = StatusStore::new();
    let hits = count_notifications(&mut store);

    store.save(dir.path().join("board.json")).unwrap();
    assert_eq!(hits.get(), 0);
}

#[test]
fn test_load_replaces_collection_and_notifies() {
    let dir = tempdir().unwrap();
    let path = status_file(
        dir.path(),
        r#"{"statuses": [{"icon": "😀", "description": "Work",
            "startDateTime": "2026-02-11T09:00:00", "durationHours": 8}]}"#,
    );

    let mut store = StatusStore::new();
    store.add(status("🗑️", "Stale", "2026-01-01T00:00:00", 1)).unwrap();
    let hits = count_notifications(&mut store);

    store.load(&path).unwrap();

    assert_eq!(hits.get(), 1);
    assert_eq!(store.all(), [status("😀", "Work", "2026-02-11T09:00:00", 8)]);
}

#[test]
fn test_mutations_auto_persist_to_loaded_path() {
    let dir = tempdir().unwrap();
    let path = empty_status_file(dir.path());

    let mut store = StatusStore::new();
    store.load(&path).unwrap();
    store.add(status("😀", "Work", "2026-02-11T09:00:00", 8)).unwrap();
    store.add(status("📚", "Study", "2026-02-11T18:00:00", 2)).unwrap();
    store.remove(0).unwrap();

    let mut other = StatusStore::new();
    other.load(&path).unwrap();
    assert_eq!(other.all(), [status("📚", "Study", "2026-02-11T18:00:00", 2)]);

    store.clear().unwrap();
    other.load(&path).unwrap();
    assert!(other.is_empty());
}

#[test]
fn test_in_memory_store_does_not_write() {
    let mut store = StatusStore::new();
    store.add(status("😀", "Work", "2026-02-11T09:00:00", 8)).unwrap();
    assert!(store.path().is_none());
    assert_eq!(store.len(), 1);
}

#[test]
fn test_load_missing_file_keeps_state() {
    let dir = tempdir().unwrap();
    let path = empty_status_file(dir.path());

    let mut store = StatusStore::new();
    store.load(&path).unwrap();
    store.add(status("😀", "Work", "2026-02-11T09:00:00", 8)).unwrap();
    let hits = count_notifications(&mut store);

    let err = store.load(dir.path().join("missing.json")).unwrap_err();

    assert!(matches!(err, AppError::Io(_)));
    assert_eq!(store.len(), 1);
    assert_eq!(store.path(), Some(path.as_path()));
    assert_eq!(hits.get(), 0);
}

#[test]
fn test_load_rejects_malformed_documents() {
    let dir = tempdir().unwrap();

    for content in ["not json at all", "[1, 2, 3]", "\"statuses\"", "{\"other\": []}", "{\"statuses\": {}}"] {
        let path = status_file(dir.path(), content);

        let mut store = StatusStore::new();
        store.add(status("😀", "Work", "2026-02-11T09:00:00", 8)).unwrap();

        let err = store.load(&path).unwrap_err();
        assert!(matches!(err, AppError::Format(_)), "content {content:?} gave {err:?}");
        assert_eq!(store.len(), 1);
        assert!(store.path().is_none());
    }
}

#[test]
fn test_add_keeps_record_when_persist_fails() {
    let dir = tempdir().unwrap();
    let path = empty_status_file(dir.path());

    let mut store = StatusStore::new();
    store.load(&path).unwrap();

    // a directory where the file used to be makes every write fail
    fs::remove_file(&path).unwrap();
    fs::create_dir(&path).unwrap();

    let hits = count_notifications(&mut store);
    let err = store
        .add(status("😀", "Work", "2026-02-11T09:00:00", 8))
        .unwrap_err();

    assert!(matches!(err, AppError::Io(_)));
    assert_eq!(store.len(), 1);
    assert_eq!(hits.get(), 1);
}

#[test]
fn test_observers_run_in_registration_order() {
    let mut store = StatusStore::new();
    let calls = Rc::new(RefCell::new(Vec::new()));

    for name in ["table", "tray", "window"] {
        let c = calls.clone();
        store.subscribe(move |_| c.borrow_mut().push(name));
    }

    store.add(status("😀", "Work", "2026-02-11T09:00:00", 8)).unwrap();
    assert_eq!(*calls.borrow(), ["table", "tray", "window"]);
}

#[test]
fn test_observer_can_query_store() {
    let mut store = StatusStore::new();
    let seen = Rc::new(RefCell::new(Vec::new()));

    let s = seen.clone();
    store.subscribe(move |st: &StatusStore| {
        let active = st.active(dt("2026-02-11T12:00:00")).len();
        s.borrow_mut().push((st.len(), active));
    });

    store.add(status("😀", "Work", "2026-02-11T09:00:00", 8)).unwrap();
    store.add(status("⌛", "Old", "2026-02-10T09:00:00", 1)).unwrap();
    store.remove(0).unwrap();

    assert_eq!(*seen.borrow(), [(1, 1), (2, 1), (1, 0)]);
}

#[test]
fn test_unsubscribe_stops_notifications() {
    let mut store = StatusStore::new();
    let hits = Rc::new(Cell::new(0));
    let h = hits.clone();
    let id = store.subscribe(move |_| h.set(h.get() + 1));

    store.clear().unwrap();
    assert!(store.unsubscribe(id));
    store.clear().unwrap();

    assert_eq!(hits.get(), 1);
    assert!(!store.unsubscribe(id));
}
