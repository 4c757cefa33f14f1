use algorhythm_client::session::store::{FileTokenStore, MemoryTokenStore, TokenStore};
use nanoid::nanoid;
use std::fs;
use std::path::PathBuf;

fn temp_session_file() -> PathBuf {
    std::env::temp_dir()
        .join(format!("algorhythm_test_{}", nanoid!(10)))
        .join("session.json")
}

#[test]
fn test_memory_store_round_trip() {
    let store = MemoryTokenStore::new();
    assert_eq!(store.token(), None);

    store.set_token("abc").unwrap();
    assert_eq!(store.token().as_deref(), Some("abc"));
    store.clear_token().unwrap();
    assert_eq!(store.token(), None);

    assert!(!store.disclaimer_accepted());
    store.accept_disclaimer().unwrap();
    assert!(store.disclaimer_accepted());
}

#[test]
fn test_file_store_persists_across_reopen() {
    let path = temp_session_file();

    let store = FileTokenStore::open(&path).unwrap();
    assert_eq!(store.token(), None);
    store.set_token("persisted").unwrap();
    store.accept_disclaimer().unwrap();

    let reopened = FileTokenStore::open(&path).unwrap();
    assert_eq!(reopened.token().as_deref(), Some("persisted"));
    assert!(reopened.disclaimer_accepted());

    reopened.clear_token().unwrap();
    let cleared = FileTokenStore::open(&path).unwrap();
    assert_eq!(cleared.token(), None);
    assert!(cleared.disclaimer_accepted());

    let _ = fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn test_file_store_ignores_corrupt_file() {
    let path = temp_session_file();
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "{not json").unwrap();

    let store = FileTokenStore::open(&path).unwrap();
    assert_eq!(store.token(), None);
    assert_eq!(store.path(), path.as_path());

    let _ = fs::remove_dir_all(path.parent().unwrap());
}

/// Session path whose parent directory is a regular file, so every write fails
fn unwritable_session_file() -> (PathBuf, PathBuf) {
    let blocker = std::env::temp_dir().join(format!("algorhythm_test_{}", nanoid!(10)));
    fs::write(&blocker, "not a directory").unwrap();
    (blocker.join("session.json"), blocker)
}

#[test]
fn test_file_store_failed_write_keeps_token_unset() {
    let (path, blocker) = unwritable_session_file();
    let store = FileTokenStore::open(&path).unwrap();

    assert!(store.set_token("tok").is_err());
    assert_eq!(store.token(), None);
    assert!(store.accept_disclaimer().is_err());
    assert!(!store.disclaimer_accepted());

    let _ = fs::remove_file(blocker);
}

#[test]
fn test_file_store_failed_clear_keeps_token() {
    let path = temp_session_file();
    let dir = path.parent().unwrap().to_path_buf();
    let store = FileTokenStore::open(&path).unwrap();
    store.set_token("kept").unwrap();

    fs::remove_dir_all(&dir).unwrap();
    fs::write(&dir, "not a directory").unwrap();

    assert!(store.clear_token().is_err());
    assert_eq!(store.token().as_deref(), Some("kept"));

    let _ = fs::remove_file(dir);
}

#[test]
fn test_file_store_leaves_no_temp_file() {
    let path = temp_session_file();
    let store = FileTokenStore::open(&path).unwrap();
    store.set_token("abc").unwrap();
    store.set_token("def").unwrap();

    let entries: Vec<_> = fs::read_dir(path.parent().unwrap())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("session.json")]);
    assert_eq!(FileTokenStore::open(&path).unwrap().token().as_deref(), Some("def"));

    let _ = fs::remove_dir_all(path.parent().unwrap());
}

#[cfg(unix)]
#[test]
fn test_file_store_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let path = temp_session_file();
    let store = FileTokenStore::open(&path).unwrap();
    store.set_token("secret").unwrap();

    let mode = fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);

    let _ = fs::remove_dir_all(path.parent().unwrap());
}
