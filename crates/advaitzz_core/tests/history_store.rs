use advaitzz_core::{HistoryError, HistoryRepository, JsonHistoryStore};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[test]
fn open_creates_empty_log_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("history.json");

    let store = JsonHistoryStore::open(&path).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    assert!(store.list_runs().is_empty());
}

#[test]
fn open_keeps_existing_entries() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");

    let first = JsonHistoryStore::open(&path).unwrap();
    first
        .record_run(&strings(&["a.test"]), &strings(&["Documents"]), "", 3)
        .unwrap();

    let reopened = JsonHistoryStore::open(&path).unwrap();
    assert_eq!(reopened.list_runs().len(), 1);
}

#[test]
fn record_then_list_returns_entry_last() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonHistoryStore::open(dir.path().join("history.json")).unwrap();

    store
        .record_run(&strings(&["first.test"]), &strings(&["Index Of"]), "", 1)
        .unwrap();
    let recorded = store
        .record_run(
            &strings(&["second.test"]),
            &strings(&["Login Pages", "Documents"]),
            "weekly sweep",
            6,
        )
        .unwrap();

    let runs = store.list_runs();
    assert_eq!(runs.len(), 2);
    let last = runs.last().unwrap();
    assert_eq!(last, &recorded);
    assert_eq!(last.domains, vec!["second.test"]);
    assert_eq!(last.categories, vec!["Login Pages", "Documents"]);
    assert_eq!(last.note, "weekly sweep");
    assert_eq!(last.count, 6);
    assert!(last.timestamp >= runs[0].timestamp);
}

#[test]
fn malformed_log_lists_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    std::fs::write(&path, "{\"oops\": ").unwrap();

    let store = JsonHistoryStore::open(&path).unwrap();
    assert!(store.list_runs().is_empty());
}

#[test]
fn missing_log_lists_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    let store = JsonHistoryStore::open(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert!(store.list_runs().is_empty());
}

#[test]
fn append_to_malformed_log_starts_fresh() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    std::fs::write(&path, "garbage").unwrap();

    let store = JsonHistoryStore::open(&path).unwrap();
    store
        .record_run(&strings(&["a.test"]), &strings(&["Documents"]), "", 3)
        .unwrap();

    let runs = store.list_runs();
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].count, 3);
}

#[test]
fn legacy_entries_are_readable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    std::fs::write(
        &path,
        r#"[{"domains": ["old.test"], "categories": ["Index Of"], "extra": "legacy", "count": 1}]"#,
    )
    .unwrap();

    let store = JsonHistoryStore::open(&path).unwrap();
    let runs = store.list_runs();
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].note, "legacy");
    assert_eq!(runs[0].timestamp, 0);
}

#[test]
fn write_failure_surfaces_as_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    let store = JsonHistoryStore::open(&path).unwrap();

    // A directory in place of the log file cannot be written.
    std::fs::remove_file(&path).unwrap();
    std::fs::create_dir(&path).unwrap();

    let err = store
        .record_run(&strings(&["a.test"]), &strings(&["Documents"]), "", 3)
        .unwrap_err();
    assert!(matches!(err, HistoryError::Io { .. }));
}
