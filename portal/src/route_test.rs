use super::*;

#[test]
fn parse_known_paths() {
    assert_eq!(Route::parse("/"), Route::Login);
    assert_eq!(Route::parse(""), Route::Login);
    assert_eq!(Route::parse("/admin"), Route::Admin);
    assert_eq!(Route::parse("/admin/"), Route::Admin);
    assert_eq!(Route::parse("/user"), Route::User);
    assert_eq!(Route::parse("/user/create-quote"), Route::CreateQuote);
    assert_eq!(Route::parse("/user/check-quotes"), Route::CheckQuotes);
    assert_eq!(Route::parse("/user/settings"), Route::Settings);
    assert_eq!(Route::parse("/register"), Route::Register);
    assert_eq!(Route::parse("/password-reset"), Route::PasswordReset);
}

#[test]
fn parse_unknown_path_is_not_found() {
    assert_eq!(Route::parse("/quotes/9"), Route::NotFound("/quotes/9".to_owned()));
}

#[test]
fn parse_confirm_reads_token_query() {
    assert_eq!(
        Route::parse("/password-reset/confirm?token=abc.def&x=1"),
        Route::PasswordResetConfirm { token: Some("abc.def".to_owned()) }
    );
}

#[test]
fn parse_confirm_without_token() {
    let none = Route::PasswordResetConfirm { token: None };
    assert_eq!(Route::parse("/password-reset/confirm"), none);
    assert_eq!(Route::parse("/password-reset/confirm?token="), none);
    assert_eq!(Route::parse("/password-reset/confirm?other=1"), none);
}

#[test]
fn path_is_inverse_of_parse() {
    let routes = [
        Route::Login,
        Route::Register,
        Route::PasswordReset,
        Route::PasswordResetConfirm { token: Some("t0k".to_owned()) },
        Route::Admin,
        Route::User,
        Route::CreateQuote,
        Route::CheckQuotes,
        Route::Settings,
    ];
    for route in routes {
        assert_eq!(Route::parse(&route.path()), route);
    }
}

#[test]
fn requirements_by_area() {
    assert_eq!(Route::Admin.requirement(), Requirement::Admin);
    assert_eq!(Route::Settings.requirement(), Requirement::EndUser);
    assert_eq!(Route::Login.requirement(), Requirement::Public);
    assert_eq!(Route::NotFound("/x".to_owned()).requirement(), Requirement::Public);
}

#[test]
fn requirement_permits_by_intersection() {
    let read_only = BTreeSet::from([Role::EndUserReadOnly]);
    assert!(Requirement::EndUser.permits(&read_only));
    assert!(!Requirement::Admin.permits(&read_only));
    assert!(Requirement::Public.permits(&BTreeSet::new()));
}
