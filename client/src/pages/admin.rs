//! Admin dashboard: shows the backend's admin message.

use leptos::prelude::*;
use portal::api::Resource;
use portal::route::Route;

use crate::util::auth::{LoadState, mount_protected};

#[component]
pub fn AdminPage() -> impl IntoView {
    let state = mount_protected(&Route::Admin, Resource::Admin);

    view! {
        <div class="admin-page">
            <h1>"Admin Dashboard"</h1>
            {move || match state.get() {
                LoadState::Loading => view! { <p>"Loading..."</p> }.into_any(),
                LoadState::Redirecting(_) => view! { <p>"Redirecting to login..."</p> }.into_any(),
                LoadState::Failed(message) => {
                    view! { <p class="alert alert--error" role="alert">{message}</p> }.into_any()
                }
                LoadState::Ready(payload) => {
                    let message = payload.message().unwrap_or_default().to_owned();
                    view! { <p class="admin-page__message">{message}</p> }.into_any()
                }
            }}
        </div>
    }
}
