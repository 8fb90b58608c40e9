use portal::session::Session;

use super::*;

fn store_in(dir: &tempfile::TempDir) -> FileSessionStore {
    FileSessionStore::new(dir.path().join("nested").join("session.json"))
}

#[test]
fn missing_file_reads_as_logged_out() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    assert_eq!(store.load().unwrap(), None);
    assert_eq!(store.read(), None);
}

#[test]
fn token_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    store_in(&dir).save("abc.def.ghi");

    let reopened = store_in(&dir);
    assert_eq!(reopened.read().as_deref(), Some("abc.def.ghi"));
    let raw = fs::read_to_string(reopened.path()).unwrap();
    assert!(raw.contains("\"token\""));
}

#[test]
fn clear_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    store.save("tok");
    store.clear();
    store.clear();
    assert_eq!(store.read(), None);
    assert!(!store.path().exists());
}

#[test]
fn corrupt_file_is_an_error_but_reads_as_absent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    fs::write(&path, "not json").unwrap();
    let store = FileSessionStore::new(path.clone());

    assert!(matches!(store.load(), Err(StoreError::Json { .. })));
    assert_eq!(store.read(), None);
}

#[test]
fn session_handle_over_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let session = Session::new(store_in(&dir));
    assert!(!session.is_logged_in());
    session.save("tok");
    assert!(session.is_logged_in());
    session.clear();
    assert!(!session.is_logged_in());
}

#[cfg(unix)]
#[test]
fn session_file_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    store.persist("secret-bearer").unwrap();
    let mode = fs::metadata(store.path()).unwrap().permissions().mode();
    assert_eq!(mode & 0o077, 0, "mode {mode:o}");
}

#[cfg(unix)]
#[test]
fn rewriting_tightens_existing_world_readable_file() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    fs::write(&path, r#"{"token":"old"}"#).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

    let store = FileSessionStore::new(path.clone());
    store.save("new");
    assert_eq!(store.read().as_deref(), Some("new"));
    assert_eq!(fs::metadata(&path).unwrap().permissions().mode() & 0o077, 0);
}
