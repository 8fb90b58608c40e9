use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use portal::page::RedirectReason;

use super::*;

fn token(payload: &str) -> String {
    format!("h.{}.s", URL_SAFE_NO_PAD.encode(payload))
}

#[test]
fn welcome_uses_username_claim() {
    let token = token(r#"{"roles":["end_user_manager"],"username":"ana@example.com"}"#);
    assert_eq!(welcome_line(Some(&token)), "Welcome, ana@example.com");
}

#[test]
fn welcome_without_username_is_generic() {
    assert_eq!(welcome_line(None), "Welcome");
    assert_eq!(welcome_line(Some("garbage")), "Welcome");
    assert_eq!(welcome_line(Some(&token(r#"{"roles":[]}"#))), "Welcome");
}

#[test]
fn dashboard_hidden_while_redirecting() {
    assert!(!renders_dashboard(&LoadState::Redirecting(RedirectReason::NoToken)));
    assert!(!renders_dashboard(&LoadState::Redirecting(RedirectReason::SessionExpired)));
    assert!(!renders_dashboard(&LoadState::Redirecting(RedirectReason::RoleMismatch)));
}

#[test]
fn dashboard_shown_while_loading_or_loaded() {
    assert!(renders_dashboard(&LoadState::Loading));
    assert!(renders_dashboard(&LoadState::Ready(portal::api::Payload(serde_json::json!({})))));
    assert!(renders_dashboard(&LoadState::Failed("Failed to fetch user data".to_owned())));
}
