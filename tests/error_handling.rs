//! Error handling and edge case tests.

use dtr_store::{Action, RetryPolicy, Store, StoreConfig, StoreError};
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

fn test_store(dir: &TempDir) -> Store {
    Store::open(StoreConfig {
        path: dir.path().join("offline_dtr.xlsx"),
        retry: RetryPolicy {
            max_attempts: 3,
            delay: Duration::ZERO,
        },
    })
    .unwrap()
}

// --- Validation ---

#[test]
fn test_empty_employee_id_is_rejected_before_writing() {
    let dir = TempDir::new().unwrap();
    let store = test_store(&dir);
    let before = fs::metadata(store.path()).unwrap().modified().unwrap();

    let result = store.record("", "Bob", Action::TimeIn);
    assert!(matches!(result, Err(StoreError::MissingField("employee ID"))));

    let after = fs::metadata(store.path()).unwrap().modified().unwrap();
    assert_eq!(before, after, "store was modified by a rejected record");
}

#[test]
fn test_empty_name_is_rejected_before_writing() {
    let dir = TempDir::new().unwrap();
    let store = test_store(&dir);

    let result = store.record("A1", "", Action::TimeIn);
    assert!(matches!(result, Err(StoreError::MissingField("name"))));
}

#[test]
fn test_whitespace_only_fields_are_rejected() {
    let dir = TempDir::new().unwrap();
    let store = test_store(&dir);

    assert!(matches!(
        store.record("   ", "Bob", Action::TimeOut),
        Err(StoreError::MissingField("employee ID"))
    ));
    assert!(matches!(
        store.record("A1", " \t ", Action::TimeOut),
        Err(StoreError::MissingField("name"))
    ));
}

#[test]
fn test_employee_id_is_checked_before_name() {
    let dir = TempDir::new().unwrap();
    let store = test_store(&dir);

    // Both missing: the employee id failure wins.
    assert!(matches!(
        store.record("", "", Action::TimeIn),
        Err(StoreError::MissingField("employee ID"))
    ));
}

// --- Initialization ---

#[test]
fn test_unwritable_store_location_fails_open() {
    let dir = TempDir::new().unwrap();

    // A regular file where a directory is needed.
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, b"not a directory").unwrap();

    let result = Store::open(StoreConfig {
        path: blocker.join("offline_dtr.xlsx"),
        retry: RetryPolicy {
            max_attempts: 3,
            delay: Duration::ZERO,
        },
    });

    assert!(matches!(result, Err(StoreError::Initialization(_))));
}

// --- Persistence ---

#[test]
fn test_corrupt_workbook_is_reported_not_retried() {
    let dir = TempDir::new().unwrap();
    let store = test_store(&dir);

    fs::write(store.path(), b"this is not a workbook").unwrap();

    let result = store.record("E1", "Ada", Action::TimeIn);
    assert!(matches!(
        result,
        Err(StoreError::Workbook(_)) | Err(StoreError::Io(_))
    ));
}
