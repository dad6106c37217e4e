use chrono::{NaiveDate, TimeZone, Utc};
use taskmgr_core::{JsonStore, Priority, Task, TaskStore};

fn sample_tasks() -> Vec<Task> {
    let mut first = Task::new(1, "Pay rent");
    first.tag = "home".to_string();
    first.priority = Priority::High;
    first.due = NaiveDate::from_ymd_opt(2025, 9, 1);
    first.timestamp = Utc.with_ymd_and_hms(2025, 1, 1, 8, 0, 0).unwrap();

    let mut second = Task::new(2, "Call mom");
    second.done = true;
    second.timestamp = Utc.with_ymd_and_hms(2025, 1, 2, 9, 30, 0).unwrap();

    vec![first, second]
}

#[test]
fn open_creates_directory_and_empty_collection() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("tasks.json");

    let store = JsonStore::open(&path).unwrap();
    assert!(path.is_file());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn save_then_load_preserves_every_field() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStore::open(dir.path().join("tasks.json")).unwrap();

    let tasks = sample_tasks();
    store.save(&tasks).unwrap();
    assert_eq!(store.load().unwrap(), tasks);
}

#[test]
fn save_of_reloaded_collection_is_byte_stable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.json");
    let store = JsonStore::open(&path).unwrap();
    store.save(&sample_tasks()).unwrap();

    store.save(&store.load().unwrap()).unwrap();
    let first_pass = std::fs::read_to_string(&path).unwrap();
    store.save(&store.load().unwrap()).unwrap();
    let second_pass = std::fs::read_to_string(&path).unwrap();

    assert_eq!(first_pass, second_pass);
}

#[test]
fn saved_document_is_pretty_printed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.json");
    let store = JsonStore::open(&path).unwrap();
    store.save(&sample_tasks()).unwrap();

    let body = std::fs::read_to_string(&path).unwrap();
    assert!(body.starts_with("[\n  {"));
    assert!(body.contains("\"id\": 1"));
    assert!(body.contains("\"due\": \"2025-09-01\""));
    assert!(body.contains("\"priority\": \"high\""));
}

#[test]
fn corrupt_document_loads_empty_and_is_preserved_aside() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.json");
    let store = JsonStore::open(&path).unwrap();
    std::fs::write(&path, "{ not json ]").unwrap();

    assert!(store.load().unwrap().is_empty());

    let aside = dir.path().join("tasks.json.corrupt");
    assert_eq!(std::fs::read_to_string(aside).unwrap(), "{ not json ]");

    // A later save starts a fresh document without touching the preserved one.
    store.save(&sample_tasks()).unwrap();
    assert_eq!(store.load().unwrap().len(), 2);
    assert!(dir.path().join("tasks.json.corrupt").is_file());
}

#[test]
fn missing_or_blank_document_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.json");
    let store = JsonStore::open(&path).unwrap();

    std::fs::write(&path, "   \n").unwrap();
    assert!(store.load().unwrap().is_empty());

    std::fs::remove_file(&path).unwrap();
    assert!(store.load().unwrap().is_empty());
}
