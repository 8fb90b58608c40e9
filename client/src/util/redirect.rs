//! Mount lifetimes and delayed navigation.

use std::time::Duration;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use portal::page::{MountLifetime, MountTicket};

/// Pause between a success message and the follow-up navigation.
pub const REDIRECT_DELAY: Duration = Duration::from_secs(3);

/// Ticket for the component currently being built. The ticket goes stale when
/// the component is cleaned up.
pub fn page_ticket() -> MountTicket {
    let lifetime = MountLifetime::default();
    let ticket = lifetime.mount();
    on_cleanup(move || lifetime.unmount());
    ticket
}

/// Navigate to `path` after `delay`, unless the page has gone away first.
pub fn navigate_after<F>(ticket: MountTicket, navigate: F, path: String, delay: Duration)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(delay).await;
        ticket.apply(|| navigate(&path, NavigateOptions::default()));
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (ticket, navigate, path, delay);
    }
}
