//! Quote request form. Nothing is sent to the backend yet; a valid form is
//! logged and acknowledged locally.

#[cfg(test)]
#[path = "create_quote_test.rs"]
mod create_quote_test;

use leptos::prelude::*;
use portal::forms::{self, QuoteForm};
use portal::route::Route;

use crate::components::alert::Alert;
use crate::components::app_layout::AppLayout;
use crate::state::form::FormStatus;
use crate::util::auth::mount_guarded;

pub const QUOTE_RECEIVED: &str = "Thanks! Your quote request has been received.";

const ACKNOWLEDGEMENTS: [&str; 6] = [
    "I certify that the information provided is accurate and complete.",
    "I understand that coverage cannot be bound or altered until the information has been confirmed by one of our representatives.",
    "I understand that this is not an insurance policy and that I must pay premium and submit a signed application before coverage is effective.",
    "I understand that any coverage descriptions provided are general descriptions only and do not represent complete descriptions of all terms, conditions, and exclusions.",
    "I understand that coverage is subject to underwriting approval and that the premium may change based on the review.",
    "I agree to the terms of service and privacy policy.",
];

const AIRCRAFT: [(&str, &str); 9] = [
    ("Manufacturer", "DJI"),
    ("Model", "Inspire 2"),
    ("Serial Number", "1234567890"),
    ("Purchase Date", "12/01/2021"),
    ("Purchase Price", "$10,000"),
    ("Financed", "Yes"),
    ("Loan Amount", "$2,500"),
    ("Loan Interest Rate", "5%"),
    ("Loan Term", "24 months"),
];

fn acknowledged(form: &QuoteForm, index: usize) -> bool {
    match index {
        0 => form.certify,
        1 => form.understand_coverage,
        2 => form.understand_policy,
        3 => form.understand_descriptions,
        4 => form.understand_underwriting,
        5 => form.agree_terms,
        _ => false,
    }
}

fn acknowledgement_mut(form: &mut QuoteForm, index: usize) -> Option<&mut bool> {
    match index {
        0 => Some(&mut form.certify),
        1 => Some(&mut form.understand_coverage),
        2 => Some(&mut form.understand_policy),
        3 => Some(&mut form.understand_descriptions),
        4 => Some(&mut form.understand_underwriting),
        5 => Some(&mut form.agree_terms),
        _ => None,
    }
}

#[component]
pub fn CreateQuotePage() -> impl IntoView {
    let allowed = mount_guarded(&Route::CreateQuote);
    let form = RwSignal::new(QuoteForm::default());
    let status = RwSignal::new(FormStatus::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = form.get();
        match forms::validate_quote(&current) {
            Ok(()) => {
                #[cfg(feature = "csr")]
                log::info!("quote request submitted: name={} email={}", current.name, current.email);
                status.update(|s| s.succeed(QUOTE_RECEIVED));
            }
            Err(message) => status.update(|s| s.fail(message)),
        }
    };

    let text_field = move |label: &'static str, read: fn(&QuoteForm) -> String, write: fn(&mut QuoteForm, String)| {
        view! {
            <label class="quote-label">
                {label}
                <input
                    class="quote-input"
                    type="text"
                    prop:value=move || form.with(read)
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| write(f, value));
                    }
                />
            </label>
        }
    };

    view! {
        <AppLayout>
            <Show when=move || allowed fallback=|| view! { <p>"Redirecting to login..."</p> }>
                <div class="quote-page">
                    <h1>"Create Quote"</h1>
                    <h2>"Please complete the form below to receive a quote."</h2>
                    <form class="quote-form" on:submit=on_submit>
                        {text_field("Your Name", |f| f.name.clone(), |f, v| f.name = v)}
                        {text_field("Your Email", |f| f.email.clone(), |f, v| f.email = v)}
                        {text_field("Your Phone Number", |f| f.phone.clone(), |f, v| f.phone = v)}
                        <dl class="quote-aircraft">
                            {AIRCRAFT
                                .iter()
                                .map(|(term, value)| view! { <dt>{*term}</dt><dd>{*value}</dd> })
                                .collect_view()}
                        </dl>
                        {ACKNOWLEDGEMENTS
                            .iter()
                            .enumerate()
                            .map(|(index, text)| {
                                view! {
                                    <label class="quote-check">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || form.with(|f| acknowledged(f, index))
                                            on:change=move |ev| {
                                                let checked = event_target_checked(&ev);
                                                form.update(|f| {
                                                    if let Some(flag) = acknowledgement_mut(f, index) {
                                                        *flag = checked;
                                                    }
                                                });
                                            }
                                        />
                                        {*text}
                                    </label>
                                }
                            })
                            .collect_view()}
                        <Alert message=Signal::derive(move || status.get().error)/>
                        <Alert message=Signal::derive(move || status.get().success) success=true/>
                        <button class="quote-button" type="submit">"Submit"</button>
                    </form>
                </div>
            </Show>
        </AppLayout>
    }
}
