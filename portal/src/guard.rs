//! Route guard: render the destination or send the visitor back to login.
//!
//! The decision has two states. `NoToken` always redirects. `TokenPresent`
//! decodes the token's roles and allows the route only when they intersect
//! the route's requirement.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use std::collections::BTreeSet;

use crate::claims;
use crate::role::Role;
use crate::route::{Requirement, Route};
use crate::session::Session;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Authorization {
    Allow,
    RedirectToLogin,
}

/// Evaluate a navigation to `route` given the stored token, if any.
#[must_use]
pub fn evaluate(token: Option<&str>, route: &Route) -> Authorization {
    let requirement = route.requirement();
    if requirement == Requirement::Public {
        return Authorization::Allow;
    }
    let Some(token) = token.filter(|t| !t.is_empty()) else {
        tracing::debug!(route = %route.path(), "no token; redirecting to login");
        return Authorization::RedirectToLogin;
    };
    if requirement.permits(&claims::decode_roles(token)) {
        Authorization::Allow
    } else {
        tracing::debug!(route = %route.path(), "token roles do not open route; redirecting to login");
        Authorization::RedirectToLogin
    }
}

/// [`evaluate`] against the token currently held by `session`.
#[must_use]
pub fn evaluate_session(session: &Session, route: &Route) -> Authorization {
    evaluate(session.read().as_deref(), route)
}

/// Where a freshly logged-in user lands. `None` means no recognized role.
#[must_use]
pub fn landing_route(roles: &BTreeSet<Role>) -> Option<Route> {
    if roles.contains(&Role::Admin) {
        Some(Route::Admin)
    } else if roles.iter().any(Role::is_end_user) {
        Some(Route::User)
    } else {
        None
    }
}

/// One entry in the end-user navigation menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub route: Route,
}

/// Menu entries visible to `roles`. Only end-user roles get a menu.
#[must_use]
pub fn menu_items(roles: &BTreeSet<Role>) -> Vec<MenuItem> {
    if !roles.iter().any(Role::is_end_user) {
        return Vec::new();
    }
    vec![
        MenuItem { label: "Home", route: Route::User },
        MenuItem { label: "Create Quote", route: Route::CreateQuote },
        MenuItem { label: "Check Quotes", route: Route::CheckQuotes },
        MenuItem { label: "Settings", route: Route::Settings },
    ]
}
