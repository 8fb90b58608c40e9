//! Auth API client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every backend call is one request/response round trip through a
//! [`Transport`]. The browser build plugs in `gloo-net`, the CLI plugs in
//! `reqwest`, and tests plug in a scripted fake. This module owns the wire
//! shapes and the mapping from HTTP outcomes to [`ApiError`].
//!
//! ERROR HANDLING
//! ==============
//! Each operation has its own rejection variant and fallback message. A
//! backend `{"error": "..."}` body wins over the fallback so the user sees the
//! backend's wording verbatim. Transport failures and 5xx responses always
//! become [`ApiError::NetworkOrServer`]. Nothing is retried.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// API root for same-origin browser requests.
pub const API_ROOT: &str = "/api";

pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTRATION_FAILED: &str = "Registration failed";
pub const RESET_REQUEST_FAILED: &str = "Failed to request password reset";
pub const RESET_CONFIRM_FAILED: &str = "Failed to reset password";
pub const SESSION_EXPIRED: &str = "Session expired, please log in again";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A request relative to the API root.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: &'static str,
    pub body: Option<Value>,
    pub bearer: Option<String>,
}

impl ApiRequest {
    #[must_use]
    pub fn get(path: &'static str) -> Self {
        Self { method: Method::Get, path, body: None, bearer: None }
    }

    #[must_use]
    pub fn post(path: &'static str, body: Value) -> Self {
        Self { method: Method::Post, path, body: Some(body), bearer: None }
    }

    #[must_use]
    pub fn with_bearer(mut self, token: &str) -> Self {
        self.bearer = Some(token.to_owned());
        self
    }

    /// `Authorization` header value, when the request carries a token.
    #[must_use]
    pub fn authorization_header(&self) -> Option<String> {
        self.bearer.as_ref().map(|token| format!("Bearer {token}"))
    }
}

/// Raw response: status code and body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    #[must_use]
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }

    /// Non-empty `error` string from a JSON body, if the backend sent one.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        let value: Value = serde_json::from_str(&self.body).ok()?;
        value
            .get("error")
            .and_then(Value::as_str)
            .filter(|message| !message.trim().is_empty())
            .map(str::to_owned)
    }

    fn json<T: for<'de> Deserialize<'de>>(&self) -> Option<T> {
        serde_json::from_str(&self.body).ok()
    }
}

/// The request never produced a response.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Sends one request and returns the raw response.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

/// User-visible failure of an API operation. The payload is the message to show.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Input rejected, by client-side checks or by the backend.
    #[error("{0}")]
    Validation(String),
    /// Login rejected.
    #[error("{0}")]
    InvalidCredentials(String),
    /// Password-reset token rejected.
    #[error("{0}")]
    InvalidOrExpiredToken(String),
    /// Protected request rejected with 401; the session is no longer valid.
    #[error("{0}")]
    Unauthorized(String),
    /// Anything else: transport failure, 5xx, 403, unexpected body.
    #[error("{0}")]
    NetworkOrServer(String),
}

impl ApiError {
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(m)
            | Self::InvalidCredentials(m)
            | Self::InvalidOrExpiredToken(m)
            | Self::Unauthorized(m)
            | Self::NetworkOrServer(m) => m,
        }
    }
}

/// Protected data sets served behind bearer auth.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    Admin,
    User,
}

impl Resource {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Admin => "/admin",
            Self::User => "/user",
        }
    }

    /// Inline message shown when fetching this resource fails for any reason
    /// other than an expired session.
    #[must_use]
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::Admin => "Failed to fetch admin data",
            Self::User => "Failed to fetch user data",
        }
    }
}

/// JSON body of a protected or public resource.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Payload(pub Value);

impl Payload {
    /// The `message` field most endpoints return.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.0.get("message").and_then(Value::as_str)
    }
}

#[derive(Serialize)]
struct Credentials<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct TokenResponse {
    token: String,
}

#[derive(Serialize)]
struct ResetRequestBody<'a> {
    username: &'a str,
}

#[derive(Deserialize)]
struct ResetRequestResponse {
    message: Option<String>,
    #[serde(rename = "resetLink")]
    reset_link: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResetConfirmBody<'a> {
    token: &'a str,
    new_password: &'a str,
}

fn to_body<T: Serialize>(body: &T) -> Value {
    serde_json::to_value(body).unwrap_or(Value::Null)
}

/// Map a non-success response onto `rejected` for 4xx, or
/// [`ApiError::NetworkOrServer`] otherwise, preferring the backend's message.
fn rejection(response: &ApiResponse, rejected: fn(String) -> ApiError, fallback: &str) -> ApiError {
    let message = response.error_message().unwrap_or_else(|| fallback.to_owned());
    if response.is_client_error() {
        rejected(message)
    } else {
        ApiError::NetworkOrServer(message)
    }
}

/// Thin client over a [`Transport`].
#[derive(Debug, Clone)]
pub struct AuthClient<T> {
    transport: T,
}

impl<T: Transport> AuthClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn round_trip(&self, request: ApiRequest, fallback: &str) -> Result<ApiResponse, ApiError> {
        let path = request.path;
        tracing::debug!(path, method = ?request.method, "api request");
        self.transport.send(request).await.map_err(|e| {
            tracing::warn!(path, error = %e, "api transport failure");
            ApiError::NetworkOrServer(fallback.to_owned())
        })
    }

    /// `POST /login`. Returns the issued token.
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidCredentials`] when the backend rejects the login.
    pub async fn login(&self, identifier: &str, secret: &str) -> Result<String, ApiError> {
        let body = to_body(&Credentials { username: identifier, password: secret });
        let response = self.round_trip(ApiRequest::post("/login", body), LOGIN_FAILED).await?;
        if !response.is_success() {
            return Err(rejection(&response, ApiError::InvalidCredentials, LOGIN_FAILED));
        }
        response
            .json::<TokenResponse>()
            .map(|body| body.token)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ApiError::NetworkOrServer(LOGIN_FAILED.to_owned()))
    }

    /// `POST /register`. Returns the backend's confirmation body.
    ///
    /// # Errors
    ///
    /// [`ApiError::Validation`] carrying the backend's message, e.g. for a
    /// duplicate account.
    pub async fn register(&self, identifier: &str, secret: &str) -> Result<Payload, ApiError> {
        let body = to_body(&Credentials { username: identifier, password: secret });
        let response = self
            .round_trip(ApiRequest::post("/register", body), REGISTRATION_FAILED)
            .await?;
        if !response.is_success() {
            return Err(rejection(&response, ApiError::Validation, REGISTRATION_FAILED));
        }
        Ok(Payload(response.json().unwrap_or_default()))
    }

    /// `POST /password-reset/request`. Returns a reference for the
    /// confirmation message: the reset link when the backend echoes one,
    /// otherwise its message. Whether the identifier exists is the backend's
    /// call.
    ///
    /// # Errors
    ///
    /// [`ApiError::NetworkOrServer`] when the request fails.
    pub async fn request_password_reset(&self, identifier: &str) -> Result<String, ApiError> {
        let body = to_body(&ResetRequestBody { username: identifier });
        let response = self
            .round_trip(ApiRequest::post("/password-reset/request", body), RESET_REQUEST_FAILED)
            .await?;
        if !response.is_success() {
            return Err(rejection(&response, ApiError::NetworkOrServer, RESET_REQUEST_FAILED));
        }
        let reference = response
            .json::<ResetRequestResponse>()
            .and_then(|body| body.reset_link.or(body.message))
            .unwrap_or_default();
        Ok(reference)
    }

    /// `POST /password-reset/confirm`.
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidOrExpiredToken`] when the backend rejects the token.
    pub async fn confirm_password_reset(&self, reset_token: &str, new_secret: &str) -> Result<Payload, ApiError> {
        let body = to_body(&ResetConfirmBody { token: reset_token, new_password: new_secret });
        let response = self
            .round_trip(ApiRequest::post("/password-reset/confirm", body), RESET_CONFIRM_FAILED)
            .await?;
        if !response.is_success() {
            return Err(rejection(&response, ApiError::InvalidOrExpiredToken, RESET_CONFIRM_FAILED));
        }
        Ok(Payload(response.json().unwrap_or_default()))
    }

    /// `GET /admin` or `GET /user` with `Authorization: Bearer <token>`.
    ///
    /// # Errors
    ///
    /// [`ApiError::Unauthorized`] on 401; [`ApiError::NetworkOrServer`] for
    /// every other failure, 403 included.
    pub async fn fetch_protected(&self, resource: Resource, token: &str) -> Result<Payload, ApiError> {
        let fallback = resource.failure_message();
        let request = ApiRequest::get(resource.path()).with_bearer(token);
        let response = self.round_trip(request, fallback).await?;
        if response.status == 401 {
            return Err(ApiError::Unauthorized(SESSION_EXPIRED.to_owned()));
        }
        if !response.is_success() {
            tracing::warn!(path = resource.path(), status = response.status, "protected fetch failed");
            return Err(ApiError::NetworkOrServer(fallback.to_owned()));
        }
        response
            .json()
            .map(Payload)
            .ok_or_else(|| ApiError::NetworkOrServer(fallback.to_owned()))
    }

    /// `GET /public`, no credentials.
    ///
    /// # Errors
    ///
    /// [`ApiError::NetworkOrServer`] when the request fails.
    pub async fn fetch_public(&self) -> Result<Payload, ApiError> {
        const FAILED: &str = "Failed to fetch public data";
        let response = self.round_trip(ApiRequest::get("/public"), FAILED).await?;
        if !response.is_success() {
            return Err(rejection(&response, ApiError::NetworkOrServer, FAILED));
        }
        response
            .json()
            .map(Payload)
            .ok_or_else(|| ApiError::NetworkOrServer(FAILED.to_owned()))
    }
}
