//! Password reset: request a link, then confirm with the link's token.

#[cfg(test)]
#[path = "password_reset_test.rs"]
mod password_reset_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};
use portal::forms;

use crate::components::alert::Alert;
use crate::state::form::{FormStatus, begin_submit};
use crate::util::redirect::page_ticket;

pub const RESET_CONFIRMED: &str = "Password reset successful. You can now log in.";

/// Confirmation shown after a reset request, echoing the backend's reference.
pub fn reset_requested_message(reference: &str) -> String {
    if reference.trim().is_empty() {
        "Password reset email sent. Check your inbox.".to_owned()
    } else {
        format!("Password reset email sent. Check your inbox (or use the link for testing: {reference})")
    }
}

#[component]
pub fn PasswordResetRequestPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let status = RwSignal::new(FormStatus::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let identifier = match forms::validate_reset_request(&username.get()) {
            Ok(identifier) => identifier,
            Err(message) => {
                status.update(|s| s.fail(message));
                return;
            }
        };
        if !begin_submit(status) {
            return;
        }

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::client().request_password_reset(&identifier).await {
                Ok(reference) => status.update(|s| s.succeed(reset_requested_message(&reference))),
                Err(err) => status.update(|s| s.fail(err.message())),
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = identifier;
        }
    };

    view! {
        <div class="auth-page">
            <h1>"Reset Password"</h1>
            <form class="auth-form" on:submit=on_submit>
                <input
                    class="auth-input"
                    type="text"
                    placeholder="Username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <Alert message=Signal::derive(move || status.get().error)/>
                <Alert message=Signal::derive(move || status.get().success) success=true/>
                <button class="auth-button" type="submit" disabled=move || status.get().busy>
                    "Request Reset"
                </button>
            </form>
            <A href="/">"Back to login"</A>
        </div>
    }
}

#[component]
pub fn PasswordResetConfirmPage() -> impl IntoView {
    let navigate = use_navigate();
    let ticket = page_ticket();
    let query = use_query_map();
    let token = move || query.with(|q| q.get("token")).filter(|t| !t.is_empty());
    let new_password = RwSignal::new(String::new());
    let status = RwSignal::new(FormStatus::default());

    Effect::new(move || {
        if token().is_none() {
            status.update(|s| s.fail(forms::MISSING_RESET_TOKEN));
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (reset_token, secret) = match forms::validate_reset_confirm(token().as_deref(), &new_password.get()) {
            Ok(values) => values,
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
                match crate::net::api::client().confirm_password_reset(&reset_token, &secret).await {
                    Ok(_) => {
                        status.update(|s| s.succeed(RESET_CONFIRMED));
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
            let _ = (&navigate, &ticket, reset_token, secret);
        }
    };

    view! {
        <div class="auth-page">
            <h1>"Choose a New Password"</h1>
            <form class="auth-form" on:submit=on_submit>
                <input
                    class="auth-input"
                    type="password"
                    placeholder="New password"
                    prop:value=move || new_password.get()
                    on:input=move |ev| new_password.set(event_target_value(&ev))
                />
                <Alert message=Signal::derive(move || status.get().error)/>
                <Alert message=Signal::derive(move || status.get().success) success=true/>
                <button class="auth-button" type="submit" disabled=move || status.get().busy>
                    "Reset Password"
                </button>
            </form>
            <A href="/">"Back to login"</A>
        </div>
    }
}
