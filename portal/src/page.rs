//! Fetch-and-render contract shared by every protected page.
//!
//! SYSTEM CONTEXT
//! ==============
//! A page mount first runs the route guard, then calls [`load_protected`]
//! exactly once. The outcome is either content to render, an inline error
//! with the session left intact, or a redirect to login. A 401 clears the
//! session before redirecting.
//!
//! CANCELLATION
//! ============
//! Fetches are not aborted mid-flight. Instead each mount takes a
//! [`MountTicket`] from the page's [`MountLifetime`]; unmounting or
//! remounting bumps the generation, and the page drops any result whose
//! ticket is no longer current.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::api::{ApiError, AuthClient, Payload, Resource, SESSION_EXPIRED, Transport};
use crate::claims;
use crate::guard;
use crate::route::Route;
use crate::session::Session;

pub const UNAUTHORIZED_ROLE: &str = "Unauthorized role";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedirectReason {
    /// No token was stored; nothing was requested.
    NoToken,
    /// The backend answered 401; the session has been cleared.
    SessionExpired,
    /// A token is stored but none of its roles fits the route.
    RoleMismatch,
}

impl RedirectReason {
    /// Why the guard refused a route for `session`.
    #[must_use]
    pub fn refusal(session: &Session) -> Self {
        if session.is_logged_in() { Self::RoleMismatch } else { Self::NoToken }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::NoToken => "Please log in to continue",
            Self::SessionExpired => SESSION_EXPIRED,
            Self::RoleMismatch => "Your account cannot open this page; log in with a permitted account",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PageOutcome {
    Render(Payload),
    InlineError(String),
    Redirect { to: Route, reason: RedirectReason },
}

/// Load `resource` for a protected page.
///
/// Without a token this returns a redirect and sends nothing. With a token it
/// issues exactly one request.
pub async fn load_protected<T: Transport>(session: &Session, client: &AuthClient<T>, resource: Resource) -> PageOutcome {
    let Some(token) = session.read() else {
        return PageOutcome::Redirect { to: Route::Login, reason: RedirectReason::NoToken };
    };
    match client.fetch_protected(resource, &token).await {
        Ok(payload) => PageOutcome::Render(payload),
        Err(ApiError::Unauthorized(_)) => {
            tracing::info!(path = resource.path(), "session rejected by backend; clearing");
            session.clear();
            PageOutcome::Redirect { to: Route::Login, reason: RedirectReason::SessionExpired }
        }
        Err(err) => PageOutcome::InlineError(err.message().to_owned()),
    }
}

/// Store a freshly issued token and pick where to go next.
///
/// # Errors
///
/// Returns [`UNAUTHORIZED_ROLE`] when the token carries no recognized role.
/// The unusable token is cleared in that case so the visitor stays logged out.
pub fn complete_login(session: &Session, token: &str) -> Result<Route, &'static str> {
    session.save(token);
    let roles = claims::decode_roles(token);
    match guard::landing_route(&roles) {
        Some(route) => Ok(route),
        None => {
            tracing::warn!(roles = ?roles, "login token carries no recognized role");
            session.clear();
            Err(UNAUTHORIZED_ROLE)
        }
    }
}

/// Drop the session and return the login route.
pub fn logout(session: &Session) -> Route {
    session.clear();
    Route::Login
}

/// Generation counter tied to one page's lifetime.
#[derive(Clone, Debug, Default)]
pub struct MountLifetime {
    generation: Arc<AtomicU64>,
}

impl MountLifetime {
    /// Start a new mount, invalidating tickets from earlier mounts.
    #[must_use]
    pub fn mount(&self) -> MountTicket {
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        MountTicket { generation, lifetime: Arc::clone(&self.generation) }
    }

    /// End the current mount. Outstanding tickets become stale.
    pub fn unmount(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
    }
}

/// Proof that a result belongs to a particular mount.
#[derive(Clone, Debug)]
pub struct MountTicket {
    generation: u64,
    lifetime: Arc<AtomicU64>,
}

impl MountTicket {
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.lifetime.load(Ordering::Acquire) == self.generation
    }

    /// Run `apply` only while this mount is still current.
    pub fn apply<R>(&self, apply: impl FnOnce() -> R) -> Option<R> {
        if self.is_current() {
            Some(apply())
        } else {
            tracing::debug!(generation = self.generation, "dropping stale page result");
            None
        }
    }
}
