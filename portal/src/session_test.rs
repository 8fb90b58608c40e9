use super::*;
use crate::testing::token_with_roles;

// =============================================================================
// MemorySessionStore
// =============================================================================

#[test]
fn save_then_read_returns_exact_token() {
    let session = Session::in_memory();
    session.save("abc.def.ghi");
    assert_eq!(session.read().as_deref(), Some("abc.def.ghi"));
}

#[test]
fn save_overwrites_previous_token() {
    let session = Session::in_memory();
    session.save("first");
    session.save("second");
    assert_eq!(session.read().as_deref(), Some("second"));
}

#[test]
fn read_on_fresh_store_is_absent() {
    assert_eq!(Session::in_memory().read(), None);
}

#[test]
fn clear_twice_matches_clear_once() {
    let session = Session::in_memory();
    session.save("tok");
    session.clear();
    assert_eq!(session.read(), None);
    session.clear();
    assert_eq!(session.read(), None);
    assert!(!session.is_logged_in());
}

#[test]
fn empty_token_counts_as_logged_out() {
    let session = Session::in_memory();
    session.save("");
    assert!(!session.is_logged_in());
}

#[test]
fn clones_share_one_store() {
    let session = Session::in_memory();
    let other = session.clone();
    session.save("shared");
    assert_eq!(other.read().as_deref(), Some("shared"));
    other.clear();
    assert!(!session.is_logged_in());
}

// =============================================================================
// roles
// =============================================================================

#[test]
fn roles_empty_when_logged_out() {
    assert!(Session::in_memory().roles().is_empty());
}

#[test]
fn roles_decoded_from_stored_token() {
    let session = Session::in_memory();
    session.save(&token_with_roles(&["admin"]));
    assert!(session.roles().contains(&Role::Admin));
}

#[test]
fn debug_output_hides_token() {
    let session = Session::in_memory();
    session.save("secret-token");
    let rendered = format!("{session:?}");
    assert!(!rendered.contains("secret-token"));
    assert!(rendered.contains("logged_in: true"));
}
