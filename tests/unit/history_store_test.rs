//! Unit tests for the history store and its JSON file storage.

use std::fs;

use rust_passgen::history::{HistoryStore, JsonFileStorage, MemoryStorage, DEFAULT_CAPACITY};
use rust_passgen::{ClearOutcome, HistoryEntry, HistoryError, HistoryStorage, StrengthLevel};

fn entry(password: &str) -> HistoryEntry {
    HistoryEntry::new(password, "16/10/2026, 12:00:00", StrengthLevel::Good)
}

fn passwords<S: HistoryStorage>(store: &HistoryStore<S>) -> Vec<String> {
    store.entries().iter().map(|e| e.password.clone()).collect()
}

// ─── Record ───

#[test]
fn test_record_twice_keeps_single_entry() {
    let mut store = HistoryStore::new(MemoryStorage::new(), DEFAULT_CAPACITY);
    store.record(entry("P"));
    store.record(entry("P"));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_eleven_records_evict_first() {
    let mut store = HistoryStore::new(MemoryStorage::new(), DEFAULT_CAPACITY);
    for i in 1..=11 {
        store.record(entry(&format!("password-{}", i)));
    }

    let expected: Vec<String> = (2..=11).rev().map(|i| format!("password-{}", i)).collect();
    assert_eq!(passwords(&store), expected);
}

#[test]
fn test_custom_capacity() {
    let mut store = HistoryStore::new(MemoryStorage::new(), 3);
    for name in ["a", "b", "c", "d"] {
        store.record(entry(name));
    }
    assert_eq!(passwords(&store), vec!["d", "c", "b"]);
}

// ─── Remove / Clear ───

#[test]
fn test_remove_past_end_fails() {
    let mut store = HistoryStore::new(MemoryStorage::new(), DEFAULT_CAPACITY);
    store.record(entry("a"));
    store.record(entry("b"));

    let err = store.remove_at(2).unwrap_err();
    assert_eq!(err, HistoryError::IndexOutOfRange { index: 2, len: 2 });
    assert_eq!(passwords(&store), vec!["b", "a"]);
}

#[test]
fn test_remove_middle_entry() {
    let mut store = HistoryStore::new(MemoryStorage::new(), DEFAULT_CAPACITY);
    for name in ["a", "b", "c"] {
        store.record(entry(name));
    }
    assert_eq!(store.remove_at(1).unwrap().password, "b");
    assert_eq!(passwords(&store), vec!["c", "a"]);
}

#[test]
fn test_clear_empty_is_not_an_error() {
    let mut store = HistoryStore::new(MemoryStorage::new(), DEFAULT_CAPACITY);
    assert_eq!(store.clear(), ClearOutcome::AlreadyEmpty);
}

// ─── JSON file persistence ───

#[test]
fn test_history_survives_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");

    {
        let mut store = HistoryStore::load(JsonFileStorage::new(&path), DEFAULT_CAPACITY);
        store.record(entry("first"));
        store.record(entry("second"));
        store.remove_at(1).unwrap();
        store.record(entry("third"));
    }

    let store = HistoryStore::load(JsonFileStorage::new(&path), DEFAULT_CAPACITY);
    assert_eq!(passwords(&store), vec!["third", "second"]);
    assert_eq!(store.entries()[0].level, StrengthLevel::Good);
}

#[test]
fn test_clear_is_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");

    let mut store = HistoryStore::load(JsonFileStorage::new(&path), DEFAULT_CAPACITY);
    store.record(entry("gone"));
    assert_eq!(store.clear(), ClearOutcome::Cleared(1));

    let reloaded = HistoryStore::load(JsonFileStorage::new(&path), DEFAULT_CAPACITY);
    assert!(reloaded.is_empty());
}

#[test]
fn test_corrupt_file_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    fs::write(&path, "[{\"password\": 42}]").unwrap();

    let mut store = HistoryStore::load(JsonFileStorage::new(&path), DEFAULT_CAPACITY);
    assert!(store.is_empty());

    // The next save replaces the corrupt file.
    store.record(entry("fresh"));
    let reloaded = HistoryStore::load(JsonFileStorage::new(&path), DEFAULT_CAPACITY);
    assert_eq!(passwords(&reloaded), vec!["fresh"]);
}

#[test]
fn test_unwritable_storage_is_degraded_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    // The target path is a directory, so the final rename fails.
    let path = dir.path().join("taken");
    fs::create_dir(&path).unwrap();
    fs::write(path.join("keep"), "x").unwrap();

    let mut store = HistoryStore::new(JsonFileStorage::new(&path), DEFAULT_CAPACITY);
    store.record(entry("kept in memory"));

    assert!(store.is_degraded());
    assert_eq!(passwords(&store), vec!["kept in memory"]);
}
