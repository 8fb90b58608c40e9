use super::*;

#[test]
fn begin_clears_previous_alerts() {
    let mut status = FormStatus { error: "bad".to_owned(), success: String::new(), busy: false };
    assert!(status.begin());
    assert!(status.busy);
    assert!(status.error.is_empty());
}

#[test]
fn begin_refuses_while_busy() {
    let mut status = FormStatus::default();
    assert!(status.begin());
    assert!(!status.begin());
}

#[test]
fn fail_and_succeed_are_exclusive() {
    let mut status = FormStatus::default();
    status.succeed("done");
    status.fail("Registration failed");
    assert_eq!(status.error, "Registration failed");
    assert!(status.success.is_empty());
    assert!(!status.busy);

    status.succeed("Registration successful! You can now log in.");
    assert!(status.error.is_empty());
    assert_eq!(status.success, "Registration successful! You can now log in.");
}

#[test]
fn finish_only_drops_busy() {
    let mut status = FormStatus::default();
    status.begin();
    status.finish();
    assert_eq!(status, FormStatus::default());
}
