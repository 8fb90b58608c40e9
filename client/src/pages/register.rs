//! Registration page.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use portal::forms;

use crate::components::alert::Alert;
use crate::state::form::{FormStatus, begin_submit};
use crate::util::redirect::page_ticket;

pub const REGISTERED: &str = "Registration successful! You can now log in.";

#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();
    let ticket = page_ticket();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let status = RwSignal::new(FormStatus::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let credentials = match forms::validate_registration(&username.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                status.update(|s| s.fail(message));
                return;
            }
        };
        if !begin_submit(status) {
            return;
        }

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            let ticket = ticket.clone();
            leptos::task::spawn_local(async move {
                let client = crate::net::api::client();
                match client.register(&credentials.identifier, &credentials.secret).await {
                    Ok(_) => {
                        status.update(|s| s.succeed(REGISTERED));
                        crate::util::redirect::navigate_after(
                            ticket,
                            navigate,
                            portal::route::Route::Login.path(),
                            crate::util::redirect::REDIRECT_DELAY,
                        );
                    }
                    Err(err) => status.update(|s| s.fail(err.message())),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&navigate, &ticket, credentials);
        }
    };

    view! {
        <div class="auth-page">
            <h1>"Register"</h1>
            <form class="auth-form" on:submit=on_submit>
                <input
                    class="auth-input"
                    type="email"
                    placeholder="Email"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <Alert message=Signal::derive(move || status.get().error)/>
                <Alert message=Signal::derive(move || status.get().success) success=true/>
                <button class="auth-button" type="submit" disabled=move || status.get().busy>
                    "Register"
                </button>
            </form>
            <A href="/">"Back to login"</A>
        </div>
    }
}
