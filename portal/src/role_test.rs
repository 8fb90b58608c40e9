use super::*;

#[test]
fn parse_known_roles() {
    assert_eq!(Role::parse("admin"), Role::Admin);
    assert_eq!(Role::parse("end_user_manager"), Role::EndUserManager);
    assert_eq!(Role::parse("end_user_read_only"), Role::EndUserReadOnly);
}

#[test]
fn legacy_read_only_spelling_maps_to_canonical_role() {
    let role = Role::parse(LEGACY_READ_ONLY);
    assert_eq!(role, Role::EndUserReadOnly);
    assert_eq!(role.as_str(), "end_user_read_only");
}

#[test]
fn unknown_role_kept_verbatim() {
    let role = Role::parse("auditor");
    assert_eq!(role, Role::Other("auditor".to_owned()));
    assert_eq!(role.to_string(), "auditor");
}

#[test]
fn parse_is_case_sensitive() {
    assert_eq!(Role::parse("Admin"), Role::Other("Admin".to_owned()));
}

#[test]
fn end_user_roles() {
    assert!(Role::EndUserManager.is_end_user());
    assert!(Role::EndUserReadOnly.is_end_user());
    assert!(!Role::Admin.is_end_user());
    assert!(!Role::Other("end_user".to_owned()).is_end_user());
}
