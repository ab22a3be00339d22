//! Inline feedback shared by the auth forms.

use leptos::prelude::*;

use crate::state::form::{ResultMessage, Tone};

/// Message under a field; renders nothing while the field is valid.
#[component]
pub fn FieldError(#[prop(into)] message: Signal<Option<&'static str>>) -> impl IntoView {
    move || message.get().map(|text| view! { <p class="auth-form__error">{text}</p> })
}

/// Status line shown once a submission settles.
#[component]
pub fn ResultLine(#[prop(into)] result: Signal<Option<ResultMessage>>) -> impl IntoView {
    move || {
        result.get().map(|result| {
            let class = match result.tone {
                Tone::Success => "auth-form__result auth-form__result--success",
                Tone::Error => "auth-form__result auth-form__result--error",
            };
            view! { <p class=class role="status">{result.text}</p> }
        })
    }
}
