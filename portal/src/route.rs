//! Client-visible routes and their role requirements.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

use std::collections::BTreeSet;

use crate::role::Role;

/// A navigable destination in the portal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    /// `/`, the unauthenticated entry point.
    Login,
    Register,
    PasswordReset,
    /// `/password-reset/confirm?token=...`; the token may be missing.
    PasswordResetConfirm { token: Option<String> },
    Admin,
    User,
    CreateQuote,
    CheckQuotes,
    Settings,
    /// Anything unmatched, holding the requested path.
    NotFound(String),
}

/// Roles a route demands before it may render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Requirement {
    Public,
    Admin,
    EndUser,
}

impl Requirement {
    /// Whether `roles` intersects the required set.
    #[must_use]
    pub fn permits(self, roles: &BTreeSet<Role>) -> bool {
        match self {
            Self::Public => true,
            Self::Admin => roles.contains(&Role::Admin),
            Self::EndUser => roles.iter().any(Role::is_end_user),
        }
    }
}

impl Route {
    /// Parse a path with optional query string, e.g. from the address bar.
    #[must_use]
    pub fn parse(path_and_query: &str) -> Self {
        let (path, query) = match path_and_query.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (path_and_query, None),
        };
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Self::Login,
            "/register" => Self::Register,
            "/password-reset" => Self::PasswordReset,
            "/password-reset/confirm" => Self::PasswordResetConfirm {
                token: query.and_then(|q| query_param(q, "token")),
            },
            "/admin" => Self::Admin,
            "/user" => Self::User,
            "/user/create-quote" => Self::CreateQuote,
            "/user/check-quotes" => Self::CheckQuotes,
            "/user/settings" => Self::Settings,
            _ => Self::NotFound(path.to_owned()),
        }
    }

    /// Path (and query, where the route carries one) to navigate to.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Login => "/".to_owned(),
            Self::Register => "/register".to_owned(),
            Self::PasswordReset => "/password-reset".to_owned(),
            Self::PasswordResetConfirm { token: Some(token) } => {
                format!("/password-reset/confirm?token={token}")
            }
            Self::PasswordResetConfirm { token: None } => "/password-reset/confirm".to_owned(),
            Self::Admin => "/admin".to_owned(),
            Self::User => "/user".to_owned(),
            Self::CreateQuote => "/user/create-quote".to_owned(),
            Self::CheckQuotes => "/user/check-quotes".to_owned(),
            Self::Settings => "/user/settings".to_owned(),
            Self::NotFound(path) => path.clone(),
        }
    }

    #[must_use]
    pub fn requirement(&self) -> Requirement {
        match self {
            Self::Admin => Requirement::Admin,
            Self::User | Self::CreateQuote | Self::CheckQuotes | Self::Settings => Requirement::EndUser,
            Self::Login
            | Self::Register
            | Self::PasswordReset
            | Self::PasswordResetConfirm { .. }
            | Self::NotFound(_) => Requirement::Public,
        }
    }
}

/// First non-empty value for `key` in a raw query string. Values are taken
/// verbatim; reset tokens are URL-safe already.
fn query_param(query: &str, key: &str) -> Option<String> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(name, value)| *name == key && !value.is_empty())
        .map(|(_, value)| value.to_owned())
}
