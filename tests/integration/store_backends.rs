//! Integration tests for profile store backends

use super::test_utils::{record, write_mounted_profile};
use clusterconf::{MountedProfileStore, ProfileStore, SledProfileStore, StorageError};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_sled_profiles_survive_reopen() {
    let temp_dir = TempDir::new().unwrap();
    {
        let store = SledProfileStore::new(temp_dir.path()).unwrap();
        store
            .put("default", &record(&[("workercount", "3")]))
            .unwrap();
        store.flush().unwrap();
    }

    let store = SledProfileStore::new(temp_dir.path()).unwrap();
    let loaded = store.get("default").unwrap().unwrap();
    assert_eq!(loaded.get("workercount").map(String::as_str), Some("3"));
}

#[test]
fn test_sled_rejects_invalid_names() {
    let temp_dir = TempDir::new().unwrap();
    let store = SledProfileStore::new(temp_dir.path()).unwrap();
    assert!(matches!(
        store.put("", &record(&[("workercount", "1")])),
        Err(StorageError::InvalidProfileName(_))
    ));
}

#[test]
fn test_mounted_lists_profiles_sorted() {
    let temp_dir = TempDir::new().unwrap();
    for name in ["zeta", "default", "alpha"] {
        write_mounted_profile(temp_dir.path(), name, &[("workercount", "1")]);
    }
    fs::write(temp_dir.path().join("README"), "not a profile").unwrap();

    let store = MountedProfileStore::new(temp_dir.path());
    assert_eq!(store.list().unwrap(), vec!["alpha", "default", "zeta"]);
}

#[cfg(unix)]
#[test]
fn test_mounted_follows_volume_symlinks() {
    use std::os::unix::fs::symlink;

    // Mirrors a mounted volume: keys are symlinks into a hidden data directory
    let temp_dir = TempDir::new().unwrap();
    let profile_dir = temp_dir.path().join("gpu");
    let data_dir = profile_dir.join("..2024_01_01");
    fs::create_dir_all(&data_dir).unwrap();
    fs::write(data_dir.join("workercount"), "6").unwrap();
    symlink("..2024_01_01", profile_dir.join("..data")).unwrap();
    symlink("..data/workercount", profile_dir.join("workercount")).unwrap();

    let store = MountedProfileStore::new(temp_dir.path());
    let loaded = store.get("gpu").unwrap().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded.get("workercount").map(String::as_str), Some("6"));
}

#[test]
fn test_mounted_non_utf8_value_is_decode_error() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("binary");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("sparkmasterconfig"), [0xffu8, 0xfe, 0x00]).unwrap();

    let store = MountedProfileStore::new(temp_dir.path());
    match store.get("binary") {
        Err(StorageError::Decode { profile, .. }) => assert_eq!(profile, "binary"),
        other => panic!("expected decode error, got {:?}", other),
    }
}
