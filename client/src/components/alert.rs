//! Inline alert shown under forms and dashboards.

use leptos::prelude::*;

/// Renders `message` when non-empty. Error styling unless `success` is set.
#[component]
pub fn Alert(message: Signal<String>, #[prop(optional)] success: bool) -> impl IntoView {
    let class = if success { "alert alert--success" } else { "alert alert--error" };
    view! {
        <Show when=move || !message.get().is_empty()>
            <p class=class role="alert">{move || message.get()}</p>
        </Show>
    }
}
