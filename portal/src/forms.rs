//! Client-side form checks, run before any request is sent.
//!
//! Each validator returns the cleaned values or the exact message the page
//! shows inline.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::api::ApiError;

pub const CREDENTIALS_REQUIRED: &str = "Email and password are required";
pub const INVALID_EMAIL: &str = "Please enter a valid email address";
pub const USERNAME_REQUIRED: &str = "Username is required";
pub const MISSING_RESET_TOKEN: &str = "Invalid or missing reset token";
pub const NEW_PASSWORD_REQUIRED: &str = "New password is required";
pub const NAME_REQUIRED: &str = "Name is required";
pub const PHONE_REQUIRED: &str = "Phone number is required";
pub const ACKNOWLEDGEMENTS_REQUIRED: &str = "Please confirm every acknowledgement";

/// Identifier and secret ready to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub identifier: String,
    pub secret: String,
}

/// Wrap a validation message in the shared error taxonomy.
#[must_use]
pub fn rejected(message: &'static str) -> ApiError {
    ApiError::Validation(message.to_owned())
}

/// Login form: both fields required. The identifier is trimmed; the secret
/// is sent exactly as typed.
///
/// # Errors
///
/// Returns [`CREDENTIALS_REQUIRED`] when either field is blank.
pub fn validate_login(identifier: &str, secret: &str) -> Result<Credentials, &'static str> {
    let identifier = identifier.trim();
    if identifier.is_empty() || secret.is_empty() {
        return Err(CREDENTIALS_REQUIRED);
    }
    Ok(Credentials { identifier: identifier.to_owned(), secret: secret.to_owned() })
}

/// Registration form: login rules plus an email-shaped identifier. The email
/// check runs on the identifier as typed, so surrounding whitespace fails it.
///
/// # Errors
///
/// Returns [`CREDENTIALS_REQUIRED`] or [`INVALID_EMAIL`].
pub fn validate_registration(identifier: &str, secret: &str) -> Result<Credentials, &'static str> {
    let credentials = validate_login(identifier, secret)?;
    if !is_valid_email(identifier) {
        return Err(INVALID_EMAIL);
    }
    Ok(credentials)
}

/// Password-reset request form.
///
/// # Errors
///
/// Returns [`USERNAME_REQUIRED`] when the identifier is blank.
pub fn validate_reset_request(identifier: &str) -> Result<String, &'static str> {
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return Err(USERNAME_REQUIRED);
    }
    Ok(identifier.to_owned())
}

/// Password-reset confirmation form. `token` comes from the page's query
/// string; a missing token is checked first.
///
/// # Errors
///
/// Returns [`MISSING_RESET_TOKEN`] or [`NEW_PASSWORD_REQUIRED`].
pub fn validate_reset_confirm(token: Option<&str>, new_secret: &str) -> Result<(String, String), &'static str> {
    let token = token.map(str::trim).filter(|t| !t.is_empty()).ok_or(MISSING_RESET_TOKEN)?;
    if new_secret.is_empty() {
        return Err(NEW_PASSWORD_REQUIRED);
    }
    Ok((token.to_owned(), new_secret.to_owned()))
}

/// Matches `^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$`.
#[must_use]
pub fn is_valid_email(candidate: &str) -> bool {
    let Some((local, domain)) = candidate.split_once('@') else {
        return false;
    };
    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '%' | '+' | '-'));
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    let host_ok = !host.is_empty() && host.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-'));
    let tld_ok = tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic());
    local_ok && host_ok && tld_ok
}

/// Placeholder quote request. Nothing is submitted to the backend yet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuoteForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub certify: bool,
    pub understand_coverage: bool,
    pub understand_policy: bool,
    pub understand_descriptions: bool,
    pub understand_underwriting: bool,
    pub agree_terms: bool,
}

impl QuoteForm {
    fn acknowledged(&self) -> bool {
        self.certify
            && self.understand_coverage
            && self.understand_policy
            && self.understand_descriptions
            && self.understand_underwriting
            && self.agree_terms
    }
}

/// Quote form: contact fields filled, email-shaped, every box ticked.
///
/// # Errors
///
/// Returns the first failing check's message.
pub fn validate_quote(form: &QuoteForm) -> Result<(), &'static str> {
    if form.name.trim().is_empty() {
        return Err(NAME_REQUIRED);
    }
    if !is_valid_email(form.email.trim()) {
        return Err(INVALID_EMAIL);
    }
    if form.phone.trim().is_empty() {
        return Err(PHONE_REQUIRED);
    }
    if !form.acknowledged() {
        return Err(ACKNOWLEDGEMENTS_REQUIRED);
    }
    Ok(())
}
