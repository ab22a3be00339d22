//! Account recovery panel.
//!
//! The backend has no self-service recovery endpoint, so this panel only
//! explains what to do and offers the way back to sign-in.

use leptos::prelude::*;

use crate::state::mode::{AuthMode, ModeRouter};

#[component]
pub fn RecoveryPanel(router: ModeRouter) -> impl IntoView {
    let on_back = move |_| router.navigate(AuthMode::Login);

    view! {
        <div class="auth-recovery">
            <p class="auth-recovery__text">
                "Forgot your password? Ask your salon administrator to reset it, or sign in "
                "with the social account you registered with."
            </p>
            <button class="auth-form__submit" type="button" on:click=on_back>
                "Back to sign in"
            </button>
        </div>
    }
}
