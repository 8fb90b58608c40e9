//! Best-effort token claims reader.
//!
//! Decodes the payload segment of a JWT-shaped token without checking its
//! signature, issuer, or expiry. The result only decides what to render;
//! it is never an authorization decision. Any decoding failure yields no
//! claims rather than an error.

#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;

use std::collections::BTreeSet;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::Value;

use crate::role::Role;

/// Claims this client reads from a token payload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Claims {
    pub roles: Vec<String>,
    pub username: Option<String>,
    pub user_id: Option<i64>,
    /// Expiry as seconds since the Unix epoch.
    pub exp: Option<i64>,
    /// Set on single-purpose tokens such as password-reset links.
    pub purpose: Option<String>,
}

impl Claims {
    #[must_use]
    pub fn role_set(&self) -> BTreeSet<Role> {
        self.roles.iter().map(|raw| Role::parse(raw)).collect()
    }

    /// `true` when `exp` is present and not after `now_secs`. Display only.
    #[must_use]
    pub fn is_expired(&self, now_secs: i64) -> bool {
        self.exp.is_some_and(|exp| exp <= now_secs)
    }
}

/// Decode the payload segment of `token`.
#[must_use]
pub fn decode_claims(token: &str) -> Option<Claims> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) =
        (segments.next(), segments.next(), segments.next(), segments.next())
    else {
        return None;
    };

    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    let value: Value = serde_json::from_slice(&bytes).ok()?;
    let object = value.as_object()?;

    let roles = object
        .get("roles")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_str).map(str::to_owned).collect())
        .unwrap_or_default();
    let text = |key: &str| object.get(key).and_then(Value::as_str).map(str::to_owned);
    let number = |key: &str| object.get(key).and_then(Value::as_i64);

    Some(Claims {
        roles,
        username: text("username"),
        user_id: number("user_id"),
        exp: number("exp"),
        purpose: text("purpose"),
    })
}

/// Roles carried by `token`; empty when the token cannot be decoded.
#[must_use]
pub fn decode_roles(token: &str) -> BTreeSet<Role> {
    match decode_claims(token) {
        Some(claims) => claims.role_set(),
        None => {
            tracing::debug!("token payload could not be decoded; no roles");
            BTreeSet::new()
        }
    }
}
