//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    admin::AdminPage,
    check_quotes::CheckQuotesPage,
    create_quote::CreateQuotePage,
    login::LoginPage,
    password_reset::{PasswordResetConfirmPage, PasswordResetRequestPage},
    register::RegisterPage,
    settings::SettingsPage,
    user::UserPage,
};
use crate::state::session::browser_session;

/// Text shown by the last-resort error boundary.
pub fn boundary_message(first_error: Option<String>) -> String {
    format!("Something went wrong: {}", first_error.unwrap_or_else(|| "Unknown error".to_owned()))
}

/// Root application component.
///
/// Provides the browser-backed session and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(browser_session());

    view! {
        <Title text="VT DroneZone"/>

        <ErrorBoundary fallback=|errors| {
            let first = errors.get().into_iter().next().map(|(_, err)| err.to_string());
            view! { <p class="alert alert--error" role="alert">{boundary_message(first)}</p> }
        }>
            <Router>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("password-reset") view=PasswordResetRequestPage/>
                    <Route
                        path=(StaticSegment("password-reset"), StaticSegment("confirm"))
                        view=PasswordResetConfirmPage
                    />
                    <Route path=StaticSegment("admin") view=AdminPage/>
                    <Route path=StaticSegment("user") view=UserPage/>
                    <Route path=(StaticSegment("user"), StaticSegment("create-quote")) view=CreateQuotePage/>
                    <Route path=(StaticSegment("user"), StaticSegment("check-quotes")) view=CheckQuotesPage/>
                    <Route path=(StaticSegment("user"), StaticSegment("settings")) view=SettingsPage/>
                </Routes>
            </Router>
        </ErrorBoundary>
    }
}
