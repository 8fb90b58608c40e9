//! End-user navigation menu.
//!
//! Entries come from the roles decoded out of the session token, so a visitor
//! without an end-user role sees only the brand and the logout button.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use portal::guard;
use portal::page;
use portal::session::Session;

#[component]
pub fn MenuBar() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    let items = guard::menu_items(&session.roles());

    let on_logout = move |_| {
        let to = page::logout(&session);
        navigate(&to.path(), NavigateOptions::default());
    };

    view! {
        <nav class="menu-bar">
            <span class="menu-bar__brand">"Insurance"</span>
            <ul class="menu-bar__items">
                {items
                    .into_iter()
                    .map(|item| {
                        view! {
                            <li class="menu-bar__item">
                                <A href=item.route.path()>{item.label}</A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <button class="menu-bar__logout" on:click=on_logout>
                "Log out"
            </button>
        </nav>
    }
}
