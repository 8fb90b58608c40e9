//! End-user dashboard.
//!
//! The `/user` fetch decides whether the visitor may stay; the dashboard body
//! itself is static placeholder content.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use leptos::prelude::*;
use portal::api::Resource;
use portal::claims;
use portal::route::Route;
use portal::session::Session;

use crate::components::app_layout::AppLayout;
use crate::util::auth::{LoadState, mount_protected};

const SECTIONS: [&str; 8] =
    ["Overview", "Policies", "Claims", "Payments", "Documents", "Profile", "Settings", "Help & Support"];

const ACTIVITY: [(&str, &str); 3] = [("Quotes", "+20%"), ("Renewals", "+10%"), ("Upcoming renewals", "+5%")];

const NEWS: [(&str, &str); 2] = [
    ("Introducing: New features to help you manage your insurance", "April 1, 2022"),
    ("We've made it easier to update your payment method", "March 15, 2022"),
];

/// Greeting for the dashboard header, using the token's username when present.
pub fn welcome_line(token: Option<&str>) -> String {
    let name = token
        .and_then(claims::decode_claims)
        .and_then(|c| c.username)
        .filter(|name| !name.is_empty());
    match name {
        Some(name) => format!("Welcome, {name}"),
        None => "Welcome".to_owned(),
    }
}

/// Whether the dashboard body may render. A refused or expired session shows
/// only the redirect notice.
pub fn renders_dashboard(state: &LoadState) -> bool {
    !matches!(state, LoadState::Redirecting(_))
}

#[component]
pub fn UserPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let state = mount_protected(&Route::User, Resource::User);
    let welcome = StoredValue::new(welcome_line(session.read().as_deref()));

    let error = move || match state.get() {
        LoadState::Failed(message) => Some(view! { <p class="alert alert--error" role="alert">{message}</p> }),
        _ => None,
    };

    view! {
        <Show
            when=move || state.with(renders_dashboard)
            fallback=|| view! { <p>"Redirecting to login..."</p> }
        >
            <AppLayout>
                {error}
                <div class="user-page">
                    <aside class="user-page__sections">
                        <ul>
                            {SECTIONS
                                .iter()
                                .map(|section| view! { <li class="user-page__section">{*section}</li> })
                                .collect_view()}
                        </ul>
                    </aside>
                    <section class="user-page__main">
                        <h1>{welcome.get_value()}</h1>
                        <h2>"Activity"</h2>
                        <div class="user-page__activity">
                            {ACTIVITY
                                .iter()
                                .map(|(label, change)| {
                                    view! {
                                        <div class="activity-card">
                                            <span class="activity-card__label">{*label}</span>
                                            <span class="activity-card__change">{*change}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <h2>"News"</h2>
                        <ul class="user-page__news">
                            {NEWS
                                .iter()
                                .map(|(headline, date)| {
                                    view! {
                                        <li class="news-item">
                                            <span class="news-item__headline">{*headline}</span>
                                            <span class="news-item__date">{*date}</span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </section>
                </div>
            </AppLayout>
        </Show>
    }
}
