//! Record Store Persistence Tests
//!
//! Covers:
//! - Seeding on first access, and only then
//! - Whole-document rewrites in the on-disk format
//! - Corrupt documents surface as errors and are never reset
//! - Writers are not serialized: the later save wins

use std::fs;

use edition_catalog::catalog::EditionService;
use edition_catalog::model::{EditionDocument, SEED_COUNT};
use edition_catalog::store::{EditionStore, FileEditionStore, StorageError};
use serde_json::{json, Value};
use tempfile::TempDir;

fn create_temp_store() -> (TempDir, FileEditionStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = FileEditionStore::new(temp_dir.path().join("db.json"));
    (temp_dir, store)
}

#[test]
fn test_seeded_document_format() {
    let (_temp, store) = create_temp_store();
    store.load().unwrap();

    let raw = fs::read_to_string(store.path()).unwrap();
    assert!(raw.starts_with("{\n  \"editions\": ["), "not pretty-printed: {}", raw);

    let document: EditionDocument = serde_json::from_str(&raw).unwrap();
    assert_eq!(document.editions.len(), SEED_COUNT);

    let value: Value = serde_json::from_str(&raw).unwrap();
    let first = &value["editions"][0];
    assert_eq!(first["id"], 1);
    assert_eq!(first["issueNumber"], 42);
    assert_eq!(first["publishDate"], "2025-03-15");
}

#[test]
fn test_existing_document_is_used_as_is() {
    let (_temp, store) = create_temp_store();
    fs::write(
        store.path(),
        json!({"editions": [{
            "id": 7,
            "title": "Hand written",
            "issueNumber": 1,
            "coverImageUrl": "u",
            "publishDate": "2020-01-01",
            "summary": "s"
        }]})
        .to_string(),
    )
    .unwrap();

    let editions = store.load().unwrap();
    assert_eq!(editions.len(), 1);
    assert_eq!(editions[0].id, 7);
    assert!(editions[0].tags.is_empty());
}

#[test]
fn test_corrupt_document_blocks_writes() {
    let (_temp, store) = create_temp_store();
    fs::write(store.path(), "null").unwrap();

    let service = EditionService::new(store.clone());
    assert!(service.delete(1).is_err());
    assert!(matches!(store.load(), Err(StorageError::Corrupt { .. })));
    assert_eq!(fs::read_to_string(store.path()).unwrap(), "null");
}

#[test]
fn test_stale_writer_overwrites_newer_document() {
    let (_temp, store) = create_temp_store();

    // Two requests load the same collection
    let first = store.load().unwrap();
    let mut second = first.clone();

    // The first deletes an edition and saves
    let mut after_delete = first.clone();
    after_delete.retain(|e| e.id != 1);
    store.save(&after_delete).unwrap();

    // The second saves its stale copy: the delete is lost
    second[1].summary = "edited".to_string();
    store.save(&second).unwrap();

    let final_state = store.load().unwrap();
    assert_eq!(final_state.len(), SEED_COUNT);
    assert!(final_state.iter().any(|e| e.id == 1));
}

#[test]
fn test_every_write_persists_whole_collection() {
    let (_temp, store) = create_temp_store();
    let service = EditionService::new(store.clone());

    let payload = json!({
        "title": "Persisted",
        "issueNumber": 50,
        "coverImageUrl": "https://example.com/p.jpg",
        "publishDate": "2026-01-01",
        "summary": "Written through a fresh store handle."
    });
    let created = service
        .create(payload.as_object().unwrap())
        .unwrap();

    let reopened = FileEditionStore::new(store.path());
    let editions = reopened.load().unwrap();
    assert_eq!(editions.len(), SEED_COUNT + 1);
    assert_eq!(editions.last().unwrap(), &created);
}
