use super::*;

#[test]
fn reset_requested_message_echoes_reference() {
    assert_eq!(
        reset_requested_message("http://localhost:8080/reset?token=abc"),
        "Password reset email sent. Check your inbox (or use the link for testing: http://localhost:8080/reset?token=abc)"
    );
}

#[test]
fn reset_requested_message_without_reference() {
    assert_eq!(reset_requested_message(""), "Password reset email sent. Check your inbox.");
}
