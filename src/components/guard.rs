//! Route guards for protected views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wrap a route's view in [`RequireAuth`] (and [`RequireSalon`] for
//! salon-scoped views). The decision comes from `util::auth` and is taken
//! before the children are built, so protected content never flashes while
//! the session is still hydrating.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::state::salon::SalonSelection;
use crate::state::session::SessionStore;
use crate::util::auth::{
    GuardDecision, LOGIN_ROUTE, PendingRedirect, SALON_SELECTION_ROUTE, evaluate_guard, require_salon,
    require_session, requested_location,
};

/// Render children only for a signed-in user; otherwise go to `/login`.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionStore>().state();
    let requested = current_location();
    let decision =
        Memo::new(move |_| evaluate_guard(require_session(&session.get()), LOGIN_ROUTE, &requested.get()));
    guard_outlet(decision, children)
}

/// Render children only while a salon is selected; otherwise go to the
/// selection view.
#[component]
pub fn RequireSalon(children: ChildrenFn) -> impl IntoView {
    let selection = expect_context::<RwSignal<SalonSelection>>();
    let requested = current_location();
    let decision = Memo::new(move |_| {
        evaluate_guard(selection.with(require_salon), SALON_SELECTION_ROUTE, &requested.get())
    });
    guard_outlet(decision, children)
}

fn current_location() -> Memo<String> {
    let location = use_location();
    Memo::new(move |_| requested_location(&location.pathname.get(), &location.search.get()))
}

fn guard_outlet(decision: Memo<GuardDecision>, children: ChildrenFn) -> impl IntoView {
    let pending = expect_context::<RwSignal<PendingRedirect>>();

    Effect::new(move || {
        if let GuardDecision::Redirect { from, .. } = decision.get() {
            pending.update(|p| p.record(&from));
        }
    });

    move || match decision.get() {
        GuardDecision::Pending => view! { <p class="guard-loading">"Loading..."</p> }.into_any(),
        GuardDecision::Allow => children().into_any(),
        GuardDecision::Redirect { to, .. } => view! { <Redirect path=to/> }.into_any(),
    }
}
