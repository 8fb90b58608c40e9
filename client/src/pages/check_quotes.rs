//! Quote history for the signed-in account.

use leptos::prelude::*;
use portal::route::Route;

use crate::components::app_layout::AppLayout;
use crate::util::auth::mount_guarded;

#[component]
pub fn CheckQuotesPage() -> impl IntoView {
    let allowed = mount_guarded(&Route::CheckQuotes);

    view! {
        <AppLayout>
            <Show when=move || allowed fallback=|| view! { <p>"Redirecting to login..."</p> }>
                <div class="placeholder-page">
                    <h1>"Check Quotes"</h1>
                    <p>"Placeholder for viewing quotes."</p>
                </div>
            </Show>
        </AppLayout>
    }
}
