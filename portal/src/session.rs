//! Session token persistence.
//!
//! DESIGN
//! ======
//! Pages never reach into storage themselves. They receive a [`Session`]
//! handle, which wraps whichever [`SessionStore`] the host provides: browser
//! `localStorage`, a file for the CLI, or memory under test. At most one token
//! is held at a time, and its presence is the only "logged in" signal.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::BTreeSet;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::claims;
use crate::role::Role;

/// Storage key shared by every host that persists the token under a name.
pub const TOKEN_KEY: &str = "token";

/// Backing storage for a single bearer token.
///
/// Calls are synchronous and atomic per call. Implementations swallow their
/// own persistence failures (logging them) so a broken store reads as
/// "logged out" rather than crashing the page.
pub trait SessionStore: Send + Sync {
    /// Persist `token`, replacing any previous value. No validation.
    fn save(&self, token: &str);
    /// Return the stored token, if any.
    fn read(&self) -> Option<String>;
    /// Remove the stored token. Clearing an empty store is a no-op.
    fn clear(&self);
}

/// In-process store. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: Mutex<Option<String>>,
}

impl MemorySessionStore {
    fn slot(&self) -> MutexGuard<'_, Option<String>> {
        self.token.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&self, token: &str) {
        *self.slot() = Some(token.to_owned());
    }

    fn read(&self) -> Option<String> {
        self.slot().clone()
    }

    fn clear(&self) {
        self.slot().take();
    }
}

/// Cloneable handle to the active session, passed explicitly to whatever
/// needs it.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn SessionStore>,
}

impl Session {
    pub fn new(store: impl SessionStore + 'static) -> Self {
        Self { store: Arc::new(store) }
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemorySessionStore::default())
    }

    pub fn save(&self, token: &str) {
        self.store.save(token);
    }

    #[must_use]
    pub fn read(&self) -> Option<String> {
        self.store.read().filter(|token| !token.is_empty())
    }

    pub fn clear(&self) {
        tracing::debug!("clearing session token");
        self.store.clear();
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.read().is_some()
    }

    /// Roles decoded from the stored token; empty when logged out or when the
    /// token cannot be decoded.
    #[must_use]
    pub fn roles(&self) -> BTreeSet<Role> {
        self.read().map(|token| claims::decode_roles(&token)).unwrap_or_default()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("logged_in", &self.is_logged_in())
            .finish()
    }
}
