#![allow(dead_code)]

use std::sync::Mutex;

use chrono::{DateTime, TimeZone, Utc};
use moneymind::{
    core::BudgetController,
    domain::{AppState, Budget},
    storage::{JsonFileStore, MemoryStore, StorageAdapter},
};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

pub fn budget() -> Budget {
    Budget::new(1000.0, 50.0, 30.0, "2025-10")
}

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, 7, 9, 30, 0).unwrap()
}

/// Controller over an in-memory store seeded with the standard test budget.
pub fn memory_controller() -> BudgetController {
    BudgetController::with_state(
        AppState::new(budget()),
        StorageAdapter::new(Box::new(MemoryStore::new())),
    )
}

/// A fresh directory that outlives the calling test.
pub fn temp_base() -> std::path::PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

pub fn file_adapter(base: &std::path::Path) -> StorageAdapter {
    let store = JsonFileStore::new(base.join("store")).expect("create json store");
    StorageAdapter::new(Box::new(store))
}
