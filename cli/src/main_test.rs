use super::*;

fn claims(roles: &[&str]) -> Claims {
    Claims {
        roles: roles.iter().map(|r| (*r).to_owned()).collect(),
        username: Some("ana@example.com".to_owned()),
        user_id: Some(7),
        exp: Some(1_000),
        purpose: None,
    }
}

#[test]
fn describe_end_user_claims() {
    assert_eq!(
        describe_claims(&claims(&["end_user_manager"]), 10),
        vec![
            "username: ana@example.com",
            "user id: 7",
            "roles: end_user_manager",
            "landing page: /user",
        ]
    );
}

#[test]
fn describe_flags_expired_token() {
    let lines = describe_claims(&claims(&["admin"]), 1_000);
    assert_eq!(lines[3], "landing page: /admin");
    assert_eq!(lines.last().map(String::as_str), Some("token: expired"));
}

#[test]
fn describe_unrecognized_roles() {
    let lines = describe_claims(&Claims::default(), 0);
    assert_eq!(lines[0], "username: (unknown)");
    assert_eq!(lines[1], "roles: (none)");
    assert_eq!(lines[2], "landing page: none (Unauthorized role)");
}

#[test]
fn password_flag_skips_prompt() {
    assert_eq!(password_or_prompt(Some("s3cret".to_owned())).unwrap(), "s3cret");
}

#[test]
fn cli_parses_reset_confirm() {
    let cli = Cli::try_parse_from(["portal-cli", "reset", "confirm", "--token", "abc", "--password", "pw"]).unwrap();
    match cli.command {
        Command::Reset(ResetCommand { command: ResetSubcommand::Confirm { token, password } }) => {
            assert_eq!(token, "abc");
            assert_eq!(password.as_deref(), Some("pw"));
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn cli_accepts_api_url_flag() {
    let cli = Cli::try_parse_from(["portal-cli", "--api-url", "https://portal.example.com/api", "admin"]).unwrap();
    assert_eq!(cli.api_url, "https://portal.example.com/api");
    assert!(matches!(cli.command, Command::Admin));
}

#[test]
fn registration_rejection_is_a_validation_error() {
    let err = registration_credentials("notanemail", "pw").unwrap_err();
    assert!(matches!(&err, CliError::Api(ApiError::Validation(m)) if m == forms::INVALID_EMAIL));
    assert_eq!(err.to_string(), forms::INVALID_EMAIL);
}

#[test]
fn registration_credentials_pass_through() {
    let credentials = registration_credentials("ana@example.com", "pw").unwrap();
    assert_eq!(credentials.identifier, "ana@example.com");
}

#[test]
fn refused_error_names_path_and_reason() {
    let err = CliError::Refused { path: "/admin".to_owned(), reason: RedirectReason::NoToken };
    assert_eq!(err.to_string(), "/admin: Please log in to continue");
}

fn session_with_roles(roles: &[&str]) -> Session {
    use base64::Engine;
    let payload = serde_json::json!({ "roles": roles }).to_string();
    let token = format!("e30.{}.sig", base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(payload));
    let session = Session::in_memory();
    session.save(&token);
    session
}

#[test]
fn guard_report_allows_public_and_matching_routes() {
    assert_eq!(guard_report(&Session::in_memory(), "/register"), "/register: allowed");
    let session = session_with_roles(&["end_user_manager"]);
    assert_eq!(guard_report(&session, "/user/settings/"), "/user/settings: allowed");
}

#[test]
fn guard_report_explains_refusal() {
    assert_eq!(
        guard_report(&Session::in_memory(), "/admin"),
        "/admin: redirect to / (Please log in to continue)"
    );
    let report = guard_report(&session_with_roles(&["end_user_read_only"]), "/admin");
    assert_eq!(report, format!("/admin: redirect to / ({})", RedirectReason::RoleMismatch.message()));
}
