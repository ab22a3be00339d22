//! Signed-in landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered behind `RequireAuth`, so a user is present whenever this view
//! builds. Logging out clears the session locally even when the server call
//! fails; the guard then sends the visitor to `/login`.

use leptos::prelude::*;

use crate::state::session::SessionStore;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let session = store.state();
    let logging_out = RwSignal::new(false);

    let on_logout = move |_| {
        if logging_out.get_untracked() {
            return;
        }
        logging_out.set(true);

        #[cfg(feature = "hydrate")]
        {
            let store = store.clone();
            leptos::task::spawn_local(async move {
                store.clear().await;
                logging_out.try_set(false);
            });
        }
    };

    let display_name = move || session.with(|s| s.user.as_ref().map(|u| u.display_name.clone()).unwrap_or_default());
    let email = move || session.with(|s| s.user.as_ref().map(|u| u.email.clone()).unwrap_or_default());
    let provider = move || session.with(|s| s.user.as_ref().map(|u| u.provider.label()).unwrap_or_default());
    let avatar = move || session.with(|s| s.user.as_ref().and_then(|u| u.avatar_url.clone()));

    view! {
        <div class="dashboard-page">
            <header class="dashboard-header">
                {move || avatar().map(|src| view! { <img class="dashboard-header__avatar" src=src alt=""/> })}
                <div class="dashboard-header__identity">
                    <h1>{display_name}</h1>
                    <p class="dashboard-header__email">{email}</p>
                    <span class="provider-badge">{provider}</span>
                </div>
                <button
                    class="dashboard-header__logout"
                    type="button"
                    disabled=move || logging_out.get()
                    on:click=on_logout
                >
                    {move || if logging_out.get() { "Signing out..." } else { "Sign out" }}
                </button>
            </header>
            <a class="dashboard-link" href="/salons">
                "Choose a salon"
            </a>
        </div>
    }
}
