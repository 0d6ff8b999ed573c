//! Unit tests for the local record store.

use crate::{IdentityError, LocalRecordStore, RECORD_FILENAME};

use lb_core::IdentityRecord;

use std::fs;

use googletest::prelude::*;
use tempfile::TempDir;

fn store_in(temp: &TempDir) -> LocalRecordStore {
    LocalRecordStore::new(temp.path().join("config"))
}

fn bob() -> IdentityRecord {
    IdentityRecord::new("Bob", "bob", "pw1", "b@x.com")
}

fn dir_entries(store: &LocalRecordStore) -> Vec<String> {
    fs::read_dir(store.dir())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect()
}

// =============================================================================
// exists / ensure_dir
// =============================================================================

#[test]
fn given_missing_directory_when_exists_then_false() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);

    assert_that!(store.exists().unwrap(), is_false());
}

#[test]
fn given_missing_directory_when_ensure_dir_twice_then_created_without_error() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);

    store.ensure_dir().unwrap();
    let second = store.ensure_dir();

    assert_that!(second, ok(anything()));
    assert_that!(store.dir().is_dir(), is_true());
}

#[test]
fn given_unrelated_files_when_exists_then_false() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);
    store.ensure_dir().unwrap();
    fs::write(store.dir().join("config.toml"), "").unwrap();
    fs::write(store.dir().join("user_configuration"), "").unwrap();

    assert_that!(store.exists().unwrap(), is_false());
}

#[test]
fn given_any_artifact_matching_convention_when_exists_then_true() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);
    store.ensure_dir().unwrap();
    fs::write(store.dir().join("user_config.db"), "").unwrap();

    assert_that!(store.exists().unwrap(), is_true());
}

#[test]
fn given_unreadable_store_dir_when_exists_then_file_read_error() {
    // Given: The store path is a regular file, so it cannot be listed
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);
    fs::write(store.dir(), "not a directory").unwrap();

    // When
    let result = store.exists();

    // Then: Reported as a read failure, never as an empty store
    assert!(matches!(result, Err(IdentityError::FileRead { .. })));
    assert!(matches!(store.load(), Err(IdentityError::FileRead { .. })));
}

// =============================================================================
// save / load
// =============================================================================

#[test]
fn given_no_record_when_load_then_not_found() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);
    store.ensure_dir().unwrap();

    let result = store.load();

    assert!(matches!(result, Err(IdentityError::NotFound { .. })));
}

#[test]
fn given_saved_record_when_load_then_returns_all_fields() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);

    store.save(&bob()).unwrap();
    let loaded = store.load().unwrap();

    assert_that!(loaded, eq(&bob()));
    assert_that!(store.exists().unwrap(), is_true());
}

#[test]
fn given_saved_record_when_reading_file_then_uses_four_string_keys() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);

    store.save(&bob()).unwrap();
    let raw = fs::read_to_string(store.record_path()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_that!(json["name"].as_str(), some(eq("Bob")));
    assert_that!(json["user"].as_str(), some(eq("bob")));
    assert_that!(json["password"].as_str(), some(eq("pw1")));
    assert_that!(json["email"].as_str(), some(eq("b@x.com")));
}

#[test]
fn given_existing_record_when_save_then_overwrites_and_leaves_no_temp_file() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);
    store.save(&bob()).unwrap();

    let carol = IdentityRecord::new("Carol", "carol", "pw2", "");
    store.save(&carol).unwrap();

    assert_that!(store.load().unwrap(), eq(&carol));
    assert_that!(dir_entries(&store), elements_are![eq(RECORD_FILENAME)]);
}

#[test]
fn given_invalid_json_when_load_then_corrupted() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);
    store.ensure_dir().unwrap();
    fs::write(store.record_path(), "{ not json").unwrap();

    let result = store.load();

    assert!(matches!(result, Err(IdentityError::Corrupted { .. })));
}

#[test]
fn given_record_missing_a_field_when_load_then_corrupted() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);
    store.ensure_dir().unwrap();
    fs::write(store.record_path(), r#"{"name":"Bob","user":"bob"}"#).unwrap();

    let result = store.load();

    assert!(matches!(result, Err(IdentityError::Corrupted { .. })));
}

#[test]
fn given_only_stray_artifact_when_load_then_corrupted() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);
    store.ensure_dir().unwrap();
    fs::write(store.dir().join("user_config.bak"), "").unwrap();

    let result = store.load();

    assert!(matches!(result, Err(IdentityError::Corrupted { .. })));
}

// =============================================================================
// purge / backup
// =============================================================================

#[test]
fn given_empty_store_when_purge_then_ok_and_not_exists() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);

    let missing_dir = store.purge();
    store.ensure_dir().unwrap();
    let empty_dir = store.purge();

    assert_that!(missing_dir, ok(anything()));
    assert_that!(empty_dir, ok(anything()));
    assert_that!(store.exists().unwrap(), is_false());
}

#[test]
fn given_record_and_artifacts_when_purge_then_all_removed_and_others_kept() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);
    store.save(&bob()).unwrap();
    fs::write(store.dir().join("user_config.db"), "").unwrap();
    fs::write(store.dir().join("config.toml"), "").unwrap();

    store.purge().unwrap();
    let again = store.purge();

    assert_that!(again, ok(anything()));
    assert_that!(store.exists().unwrap(), is_false());
    assert_that!(dir_entries(&store), elements_are![eq("config.toml")]);
}

#[test]
fn given_corrupted_record_when_backup_then_moved_outside_convention() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);
    store.ensure_dir().unwrap();
    fs::write(store.record_path(), "garbage").unwrap();

    let backups = store.backup_corrupted().unwrap();

    assert_that!(backups.len(), eq(1));
    assert_that!(backups[0].exists(), is_true());
    assert_that!(fs::read_to_string(&backups[0]).unwrap(), eq("garbage"));
    assert_that!(store.exists().unwrap(), is_false());
}

#[test]
fn given_nothing_to_back_up_when_backup_then_empty() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);
    store.ensure_dir().unwrap();

    let backups = store.backup_corrupted().unwrap();

    assert_that!(backups.len(), eq(0));
}
