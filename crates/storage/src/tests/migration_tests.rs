use std::sync::{Arc, Barrier};
use std::thread;

use crate::{SCHEMA_VERSION, Storage};
use goalflow_core::SEED_QUOTES;
use rusqlite::Connection;
use tempfile::TempDir;

/// Goals/subtasks layout of a first-release database.
const V1_SCHEMA: &str = "
CREATE TABLE goals (
    id TEXT PRIMARY KEY, title TEXT NOT NULL, description TEXT NOT NULL DEFAULT '',
    target_date TEXT NOT NULL, category TEXT NOT NULL DEFAULT '', priority TEXT NOT NULL,
    status TEXT NOT NULL, progress INTEGER NOT NULL DEFAULT 0,
    created_at INTEGER NOT NULL, updated_at INTEGER NOT NULL
);
CREATE TABLE subtasks (
    id TEXT PRIMARY KEY, goal_id TEXT NOT NULL, title TEXT NOT NULL,
    is_completed INTEGER NOT NULL DEFAULT 0, target_date TEXT NOT NULL, created_at INTEGER NOT NULL
);
INSERT INTO goals VALUES ('g1', 'Legacy', 'from v1', '2024-12-31', 'Work', 'high', 'active', 50, 1, 2);
PRAGMA user_version = 1;
";

#[test]
fn test_fresh_database_is_current_and_seeded() {
    let temp_dir = TempDir::new().unwrap();
    let storage = Storage::open(&temp_dir.path().join("fresh.db")).unwrap();

    assert_eq!(storage.schema_version().unwrap(), SCHEMA_VERSION);
    let quotes = storage.get_quotes().unwrap();
    assert_eq!(quotes.len(), SEED_QUOTES.len());
    assert_eq!(quotes[0].text, SEED_QUOTES[0].0);
}

#[test]
fn test_reopen_does_not_reseed_quotes() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("reopen.db");
    let storage = Storage::open(&path).unwrap();
    storage.close();

    let reopened = Storage::open(&path).unwrap();
    assert_eq!(reopened.stats().unwrap().quotes, SEED_QUOTES.len() as u64);
}

#[test]
fn test_concurrent_first_open_seeds_quotes_once() {
    const OPENERS: usize = 4;
    let temp_dir = TempDir::new().unwrap();
    let path = Arc::new(temp_dir.path().join("race.db"));
    let barrier = Arc::new(Barrier::new(OPENERS));

    let handles: Vec<_> = (0..OPENERS)
        .map(|_| {
            let path = Arc::clone(&path);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                Storage::open(&path).map(Storage::close)
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap().unwrap();
    }

    let storage = Storage::open(&path).unwrap();
    assert_eq!(storage.schema_version().unwrap(), SCHEMA_VERSION);
    assert_eq!(storage.stats().unwrap().quotes, SEED_QUOTES.len() as u64);
}

#[test]
fn test_cleared_quotes_stay_cleared_after_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("cleared.db");
    let storage = Storage::open(&path).unwrap();
    storage.clear(crate::Table::Quotes).unwrap();
    storage.close();

    assert_eq!(Storage::open(&path).unwrap().stats().unwrap().quotes, 0);
}

#[test]
fn test_v1_database_upgraded_with_backfilled_columns() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("legacy.db");
    Connection::open(&path).unwrap().execute_batch(V1_SCHEMA).unwrap();

    let storage = Storage::open(&path).unwrap();
    assert_eq!(storage.schema_version().unwrap(), SCHEMA_VERSION);

    let goal = storage.get_goal("g1").unwrap().unwrap();
    assert_eq!(goal.title, "Legacy");
    assert_eq!(goal.progress, 50);
    assert_eq!(goal.icon, "");
    assert_eq!(goal.short_description, "");
    assert_eq!(storage.stats().unwrap().quotes, SEED_QUOTES.len() as u64);
}

#[test]
fn test_newer_schema_refused() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("future.db");
    Connection::open(&path)
        .unwrap()
        .pragma_update(None, "user_version", SCHEMA_VERSION + 1)
        .unwrap();

    let err = Storage::open(&path).unwrap_err();
    assert!(matches!(err, crate::StorageError::Migration(_)));
}
