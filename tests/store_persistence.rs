//! Record Store Persistence Tests
//!
//! Write-through behavior of the data file and serialization of
//! concurrent mutations.

use std::fs;
use std::sync::Arc;
use std::thread;

use admediation::store::{AdNetworkStore, NewAdNetwork, StoreError, ValueUpdate};
use tempfile::TempDir;

fn create_temp_data_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

fn new_network(description: &str, value: i64) -> NewAdNetwork {
    NewAdNetwork {
        description: description.to_string(),
        value,
        platform: "Android".to_string(),
        adtype: "Video".to_string(),
        ..Default::default()
    }
}

#[test]
fn test_every_mutation_is_visible_after_reload() {
    let temp_dir = create_temp_data_dir();
    let path = temp_dir.path().join("output.txt");
    fs::write(&path, "[]").unwrap();

    {
        let store = AdNetworkStore::load(&path).unwrap();
        store.create(new_network("AdMob", 10)).unwrap();
        store.create(new_network("Unity", 20)).unwrap();
        store.update(1, ValueUpdate::new(5)).unwrap();
        store.delete(2).unwrap();
    }

    let reloaded = AdNetworkStore::load(&path).unwrap();
    let records = reloaded.list_all().unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, 1);
    assert_eq!(records[0].description, "admob");
    assert_eq!(records[0].platform, "android");
    assert_eq!(records[0].value, 5);
}

#[test]
fn test_file_is_one_space_indented() {
    let temp_dir = create_temp_data_dir();
    let path = temp_dir.path().join("output.txt");
    fs::write(&path, "[]").unwrap();

    let store = AdNetworkStore::load(&path).unwrap();
    store.create(new_network("admob", 1)).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("[\n {\n  \"id\": 1,\n  \"description\": \"admob\""));
}

#[test]
fn test_failed_mutation_does_not_touch_file() {
    let temp_dir = create_temp_data_dir();
    let path = temp_dir.path().join("output.txt");
    fs::write(&path, "[]").unwrap();

    let store = AdNetworkStore::load(&path).unwrap();
    assert!(matches!(
        store.update(3, ValueUpdate::new(1)),
        Err(StoreError::NotFound(3))
    ));
    assert!(matches!(store.delete(3), Err(StoreError::NotFound(3))));

    assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
}

#[test]
fn test_write_failure_is_reported() {
    let temp_dir = create_temp_data_dir();
    let path = temp_dir.path().join("missing-dir").join("output.txt");

    let store = AdNetworkStore::with_records(&path, vec![]);
    let result = store.create(new_network("admob", 1));

    assert!(matches!(result, Err(StoreError::WriteFailed { .. })));
}

#[test]
fn test_concurrent_creates_get_unique_ids() {
    let temp_dir = create_temp_data_dir();
    let path = temp_dir.path().join("output.txt");
    fs::write(&path, "[]").unwrap();

    let store = Arc::new(AdNetworkStore::load(&path).unwrap());

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for i in 0..10 {
                    store.create(new_network("unity", t * 10 + i)).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let mut ids: Vec<i64> = store.list_all().unwrap().iter().map(|r| r.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, (1..=80).collect::<Vec<i64>>());

    let reloaded = AdNetworkStore::load(&path).unwrap();
    assert_eq!(reloaded.len().unwrap(), 80);
}
