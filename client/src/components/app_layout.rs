//! Shell for the end-user area: menu bar beside the routed content.

use leptos::prelude::*;

use crate::components::menu_bar::MenuBar;

#[component]
pub fn AppLayout(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <MenuBar/>
            <main class="app-layout__content">{children()}</main>
        </div>
    }
}
