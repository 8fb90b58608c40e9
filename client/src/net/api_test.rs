use super::*;

#[test]
fn endpoint_prefixes_api_root() {
    assert_eq!(endpoint("/login"), "/api/login");
    assert_eq!(endpoint("/password-reset/confirm"), "/api/password-reset/confirm");
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_transport_reports_unavailable() {
    let result = futures::executor::block_on(client().transport().send(ApiRequest::get("/admin")));
    assert_eq!(
        result,
        Err(TransportError("/api/admin unavailable outside the browser".to_owned()))
    );
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_login_surfaces_network_failure() {
    let result = futures::executor::block_on(client().login("a@b.co", "pw"));
    assert_eq!(result, Err(portal::api::ApiError::NetworkOrServer("Login failed".to_owned())));
}
