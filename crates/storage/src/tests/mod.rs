//! Test utilities and module declarations for storage tests.

use crate::Storage;
use chrono::NaiveDate;
use goalflow_core::{Goal, NewGoal, Priority};
use tempfile::TempDir;

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn create_test_storage() -> (Storage, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let storage = Storage::open(&db_path).unwrap();
    (storage, temp_dir)
}

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn add_test_goal(storage: &Storage, title: &str) -> Goal {
    storage.add_goal(NewGoal::new(title, date(2030, 6, 1), Priority::High).category("Health")).unwrap()
}

mod archive_tests;
mod idea_tests;
mod migration_tests;
