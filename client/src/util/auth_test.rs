use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::json;

use super::*;

fn token_with_roles(roles: &[&str]) -> String {
    let payload = URL_SAFE_NO_PAD.encode(json!({ "roles": roles }).to_string());
    format!("e30.{payload}.sig")
}

#[test]
fn guard_redirect_without_token() {
    let session = Session::in_memory();
    assert_eq!(guard_redirect(&session, &Route::Admin), Some("/".to_owned()));
}

#[test]
fn guard_redirect_none_for_matching_role() {
    let session = Session::in_memory();
    session.save(&token_with_roles(&["end_user_manager"]));
    assert_eq!(guard_redirect(&session, &Route::CreateQuote), None);
    assert_eq!(guard_redirect(&session, &Route::Admin), Some("/".to_owned()));
}

#[test]
fn guard_redirect_none_for_public_route() {
    assert_eq!(guard_redirect(&Session::in_memory(), &Route::Register), None);
}

#[test]
fn settle_render() {
    let payload = Payload(json!({ "message": "Admin access granted" }));
    assert_eq!(settle(PageOutcome::Render(payload.clone())), (LoadState::Ready(payload), None));
}

#[test]
fn settle_inline_error_does_not_navigate() {
    assert_eq!(
        settle(PageOutcome::InlineError("Failed to fetch user data".to_owned())),
        (LoadState::Failed("Failed to fetch user data".to_owned()), None)
    );
}

#[test]
fn settle_expired_session_navigates_home() {
    let outcome = PageOutcome::Redirect { to: Route::Login, reason: RedirectReason::SessionExpired };
    assert_eq!(
        settle(outcome),
        (LoadState::Redirecting(RedirectReason::SessionExpired), Some("/".to_owned()))
    );
}

#[test]
fn refused_without_token_reports_no_token() {
    let session = Session::in_memory();
    assert!(guard_redirect(&session, &Route::User).is_some());
    assert_eq!(refused_state(&session), LoadState::Redirecting(RedirectReason::NoToken));
}

#[test]
fn refused_with_wrong_role_reports_role_mismatch() {
    let session = Session::in_memory();
    session.save(&token_with_roles(&["end_user_read_only"]));
    assert!(guard_redirect(&session, &Route::Admin).is_some());
    assert_eq!(refused_state(&session), LoadState::Redirecting(RedirectReason::RoleMismatch));
}
