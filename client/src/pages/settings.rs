//! Account settings for the signed-in user.

use leptos::prelude::*;
use portal::route::Route;

use crate::components::app_layout::AppLayout;
use crate::util::auth::mount_guarded;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let allowed = mount_guarded(&Route::Settings);

    view! {
        <AppLayout>
            <Show when=move || allowed fallback=|| view! { <p>"Redirecting to login..."</p> }>
                <div class="placeholder-page">
                    <h1>"Settings"</h1>
                    <p>"Placeholder for user settings."</p>
                </div>
            </Show>
        </AppLayout>
    }
}
