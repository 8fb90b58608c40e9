#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn read_is_empty_outside_browser() {
    assert_eq!(BrowserSessionStore.read(), None);
}

#[test]
fn save_and_clear_are_noops_outside_browser() {
    let session = browser_session();
    session.save("tok");
    assert!(!session.is_logged_in());
    session.clear();
    session.clear();
    assert_eq!(session.read(), None);
}
