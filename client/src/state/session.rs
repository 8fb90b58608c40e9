//! Browser-backed session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one [`Session`] as context; pages and the menu bar pull it
//! with `expect_context` instead of touching `localStorage` themselves.
//!
//! TRADE-OFFS
//! ==========
//! Storage access is best-effort browser-only behavior. Outside the browser
//! every call is a no-op and reads come back empty.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use portal::session::{Session, SessionStore};

/// `window.localStorage`, key [`portal::session::TOKEN_KEY`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStore;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStore for BrowserSessionStore {
    fn save(&self, token: &str) {
        #[cfg(feature = "csr")]
        {
            let stored = local_storage()
                .map(|storage| storage.set_item(portal::session::TOKEN_KEY, token).is_ok())
                .unwrap_or(false);
            if !stored {
                log::warn!("could not persist session token");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
        }
    }

    fn read(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(portal::session::TOKEN_KEY).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(portal::session::TOKEN_KEY);
            }
        }
    }
}

/// Session handle backed by browser storage.
pub fn browser_session() -> Session {
    Session::new(BrowserSessionStore)
}
