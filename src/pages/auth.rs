//! Auth page serving `/login`, `/register`, `/recover` and `/recovery`.
//!
//! SYSTEM CONTEXT
//! ==============
//! One page hosts all three auth panels. A page-local [`ModeRouter`] keeps
//! the visible panel and the location in step: tabs call `navigate`, and an
//! effect on the router's pathname feeds back/forward navigation into
//! `handle_location_change`, which also canonicalises aliases such as
//! `/recovery` on first render.
//!
//! DESIGN
//! ======
//! Switching panels remounts the panel component, so each form starts fresh
//! and a reply for a form that is no longer shown is dropped.
//!
//! A visitor who turns out to be signed in once startup hydration settles
//! is sent on to the pending destination. The check fires once per mount so
//! that a successful sign-up can still show its message before leaving.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::login_panel::LoginPanel;
use crate::components::recovery_panel::RecoveryPanel;
use crate::components::register_panel::RegisterPanel;
use crate::state::mode::{AuthMode, ModeRouter};
use crate::state::session::SessionStore;
use crate::util::auth::{PendingRedirect, take_post_login_target};
use crate::util::history::RouterHistory;

#[component]
pub fn AuthPage() -> impl IntoView {
    let session = expect_context::<SessionStore>().state();
    let pending = expect_context::<RwSignal<PendingRedirect>>();
    let navigate = use_navigate();
    let location = use_location();

    let router = ModeRouter::new(Arc::new(RouterHistory::from_router()));
    let mode = router.mode();

    let router_location = router.clone();
    Effect::new(move || {
        location.pathname.track();
        router_location.handle_location_change();
    });

    let checked_session = StoredValue::new(false);
    Effect::new(move || {
        let state = session.get();
        if state.loading || checked_session.get_value() {
            return;
        }
        checked_session.set_value(true);
        if state.is_authenticated() {
            navigate(&take_post_login_target(pending), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let tabs = AuthMode::ALL
        .into_iter()
        .map(|tab| {
            let router = router.clone();
            view! {
                <button
                    class="auth-tab"
                    class:auth-tab--active=move || mode.get() == tab
                    type="button"
                    on:click=move |_| router.navigate(tab)
                >
                    {tab.label()}
                </button>
            }
        })
        .collect_view();

    let panel = move || match mode.get() {
        AuthMode::Login => view! { <LoginPanel/> }.into_any(),
        AuthMode::Register => view! { <RegisterPanel router=router.clone()/> }.into_any(),
        AuthMode::Recover => view! { <RecoveryPanel router=router.clone()/> }.into_any(),
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Aura"</h1>
                <p class="auth-card__subtitle">{move || mode.get().label()}</p>
                <nav class="auth-tabs">{tabs}</nav>
                {panel}
            </div>
        </div>
    }
}
