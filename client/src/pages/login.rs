//! Login page: email + password, then land by role.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use portal::forms;
use portal::session::Session;

use crate::components::alert::Alert;
use crate::state::form::{FormStatus, begin_submit};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let status = RwSignal::new(FormStatus::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let credentials = match forms::validate_login(&email.get(), &password.get()) {
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
            let session = session.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let client = crate::net::api::client();
                match client.login(&credentials.identifier, &credentials.secret).await {
                    Ok(token) => match portal::page::complete_login(&session, &token) {
                        Ok(route) => {
                            status.update(FormStatus::finish);
                            navigate(&route.path(), leptos_router::NavigateOptions::default());
                        }
                        Err(message) => status.update(|s| s.fail(message)),
                    },
                    Err(err) => status.update(|s| s.fail(err.message())),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&session, &navigate, credentials);
        }
    };

    view! {
        <div class="login-page">
            <header class="login-page__header">
                <span class="login-page__brand">"VT DroneZone"</span>
                <A href="/register">"Sign up"</A>
            </header>
            <div class="login-card">
                <h1>"Log in below"</h1>
                <p class="login-card__subtitle">"Log in to your VT DroneZone account"</p>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label">
                        "Email"
                        <input
                            class="login-input"
                            type="email"
                            placeholder="Email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-label">
                        "Password"
                        <input
                            class="login-input"
                            type="password"
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <Alert message=Signal::derive(move || status.get().error)/>
                    <A href="/password-reset">"Forgot your password?"</A>
                    <button class="login-button" type="submit" disabled=move || status.get().busy>
                        "Login"
                    </button>
                </form>
            </div>
        </div>
    }
}
