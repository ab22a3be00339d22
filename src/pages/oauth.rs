//! OAuth completion page for `/oauth/success` and `/oauth2/callback`.
//!
//! The provider round-trip leaves a session cookie behind, so completing the
//! flow is a single re-hydration on mount: success enters the app, failure
//! offers a retry.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use crate::{state::session::SessionStore, util::auth::PendingRedirect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
enum Completion {
    Checking,
    Failed,
}

#[component]
pub fn OAuthCallbackPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let (store, pending) = (expect_context::<SessionStore>(), expect_context::<RwSignal<PendingRedirect>>());
    let navigate = use_navigate();
    let status = RwSignal::new(Completion::Checking);
    let attempt = RwSignal::new(0_u32);

    let leave_to = RwSignal::new(None::<String>);
    Effect::new(move || {
        if let Some(target) = leave_to.get() {
            navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    // Runs on mount and again for every retry.
    Effect::new(move || {
        attempt.track();
        status.set(Completion::Checking);

        #[cfg(feature = "hydrate")]
        {
            let store = store.clone();
            leptos::task::spawn_local(async move {
                if store.refresh_user().await {
                    leave_to.try_set(Some(crate::util::auth::take_post_login_target(pending)));
                } else {
                    leptos::logging::warn!("oauth completion: no session after provider redirect");
                    status.try_set(Completion::Failed);
                }
            });
        }
    });

    view! {
        <div class="auth-page">
            <div class="auth-card">
                {move || match status.get() {
                    Completion::Checking => {
                        view! { <p class="auth-card__subtitle">"Completing sign-in..."</p> }.into_any()
                    }
                    Completion::Failed => {
                        view! {
                            <p class="auth-form__result auth-form__result--error">
                                "Sign-in could not be completed."
                            </p>
                            <button
                                class="auth-form__submit"
                                type="button"
                                on:click=move |_| attempt.update(|n| *n += 1)
                            >
                                "Try again"
                            </button>
                            <a class="auth-card__link" href="/login">
                                "Back to sign in"
                            </a>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
