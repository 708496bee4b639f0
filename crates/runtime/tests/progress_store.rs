//! File-backed progress store behavior.

use battle_core::{ProgressError, ProgressStore};
use runtime::FileProgressStore;

fn store_in(dir: &tempfile::TempDir) -> FileProgressStore {
    FileProgressStore::open(dir.path().join("progress.json")).unwrap()
}

#[test]
fn missing_file_reports_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    assert_eq!(store.player_level().unwrap(), 1);
    assert_eq!(store.enemy_level().unwrap(), 1);
    assert_eq!(store.best_level().unwrap(), 1);
}

#[test]
fn levels_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    store.set_player_level(7).unwrap();
    store.set_enemy_level(9).unwrap();
    store.set_best_level(7).unwrap();

    assert_eq!(store.player_level().unwrap(), 7);
    assert_eq!(store.enemy_level().unwrap(), 9);
    assert_eq!(store.best_level().unwrap(), 7);
}

#[test]
fn writes_survive_reopening() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("progress.json");

    {
        let store = FileProgressStore::open(&path).unwrap();
        store.set_player_level(12).unwrap();
        store.set_best_level(12).unwrap();
    }

    let reopened = FileProgressStore::open(&path).unwrap();
    assert_eq!(reopened.player_level().unwrap(), 12);
    assert_eq!(reopened.best_level().unwrap(), 12);
    assert_eq!(reopened.enemy_level().unwrap(), 1);
}

#[test]
fn reset_clears_levels_but_keeps_best() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    store.set_player_level(15).unwrap();
    store.set_enemy_level(14).unwrap();
    store.set_best_level(15).unwrap();

    store.reset_progress().unwrap();

    assert_eq!(store.player_level().unwrap(), 1);
    assert_eq!(store.enemy_level().unwrap(), 1);
    assert_eq!(store.best_level().unwrap(), 15);
}

#[test]
fn partial_records_fill_in_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("progress.json");
    std::fs::write(&path, r#"{"player_level": 4}"#).unwrap();

    let store = FileProgressStore::open(&path).unwrap();
    assert_eq!(store.player_level().unwrap(), 4);
    assert_eq!(store.enemy_level().unwrap(), 1);
    assert_eq!(store.best_level().unwrap(), 1);
}

#[test]
fn corrupt_file_is_a_serialization_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("progress.json");
    std::fs::write(&path, "not json at all").unwrap();

    let result = FileProgressStore::open(&path);
    assert!(matches!(result, Err(ProgressError::Serialization(_))));
}

#[test]
fn setter_leaves_no_temp_file_behind() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    store.set_player_level(3).unwrap();

    let names: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(names, vec!["progress.json".to_owned()]);
}
