//! Route guarding and fetch-on-mount for protected pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected page applies the same sequence: run the guard, redirect to
//! login if it refuses, otherwise fetch the page's resource once and settle
//! into one [`LoadState`].

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use portal::api::{Payload, Resource};
use portal::guard::{self, Authorization};
use portal::page::{PageOutcome, RedirectReason};
use portal::route::Route;
use portal::session::Session;

/// Where a protected page is in its load.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState {
    Loading,
    Ready(Payload),
    Failed(String),
    Redirecting(RedirectReason),
}

/// Login path when the guard refuses `route`, `None` when it may render.
pub fn guard_redirect(session: &Session, route: &Route) -> Option<String> {
    match guard::evaluate_session(session, route) {
        Authorization::Allow => None,
        Authorization::RedirectToLogin => Some(Route::Login.path()),
    }
}

/// Install an effect that navigates to login when the guard refuses `route`.
/// Returns whether the page may render its content.
pub fn install_route_guard<F>(session: &Session, route: &Route, navigate: F) -> bool
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let Some(target) = guard_redirect(session, route) else {
        return true;
    };
    Effect::new(move || navigate(&target, NavigateOptions::default()));
    false
}

/// State shown once the guard has refused the current route.
pub fn refused_state(session: &Session) -> LoadState {
    LoadState::Redirecting(RedirectReason::refusal(session))
}

/// Split a load outcome into the state to show and an optional navigation.
pub fn settle(outcome: PageOutcome) -> (LoadState, Option<String>) {
    match outcome {
        PageOutcome::Render(payload) => (LoadState::Ready(payload), None),
        PageOutcome::InlineError(message) => (LoadState::Failed(message), None),
        PageOutcome::Redirect { to, reason } => (LoadState::Redirecting(reason), Some(to.path())),
    }
}

/// Guard `route`, then fetch `resource` once for the current mount.
///
/// Results that arrive after the page unmounts are dropped.
pub fn mount_protected(route: &Route, resource: Resource) -> RwSignal<LoadState> {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    let state = RwSignal::new(LoadState::Loading);

    if !install_route_guard(&session, route, navigate.clone()) {
        state.set(refused_state(&session));
        return state;
    }

    let ticket = crate::util::redirect::page_ticket();
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let outcome = portal::page::load_protected(&session, &crate::net::api::client(), resource).await;
        ticket.apply(|| {
            let (next, redirect) = settle(outcome);
            state.set(next);
            if let Some(path) = redirect {
                navigate(&path, NavigateOptions::default());
            }
        });
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, navigate, resource, ticket);
    }
    state
}

/// Guard a page that has nothing to fetch.
pub fn mount_guarded(route: &Route) -> bool {
    let session = expect_context::<Session>();
    install_route_guard(&session, route, use_navigate())
}
