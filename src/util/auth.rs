//! Shared auth routing helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards, the auth page and the OAuth completion page all need the
//! same answers: may this view render yet, where does a refused visitor go,
//! and where does a freshly signed-in user land. The decisions live here as
//! plain functions; `components::guard` wires them to signals.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::{RwSignal, Update};

use crate::net::types::AuthProvider;
use crate::state::salon::SalonSelection;
use crate::state::session::SessionState;

pub const LOGIN_ROUTE: &str = "/login";
pub const SALON_SELECTION_ROUTE: &str = "/salons";
pub const HOME_ROUTE: &str = "/";

/// Providers offered as social sign-in buttons, in display order.
pub const SOCIAL_PROVIDERS: [AuthProvider; 3] = [AuthProvider::Google, AuthProvider::Kakao, AuthProvider::Naver];

/// What a guard should do with its children right now.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// The precondition is not known yet; render a placeholder.
    Pending,
    Allow,
    /// Leave for `to`, remembering that `from` was requested.
    Redirect { to: &'static str, from: String },
}

/// Decide from a possibly-unknown precondition.
pub fn evaluate_guard(condition: Option<bool>, redirect_to: &'static str, requested: &str) -> GuardDecision {
    match condition {
        None => GuardDecision::Pending,
        Some(true) => GuardDecision::Allow,
        Some(false) => GuardDecision::Redirect { to: redirect_to, from: requested.to_owned() },
    }
}

/// Authenticated-session precondition; unknown while hydration runs.
pub fn require_session(state: &SessionState) -> Option<bool> {
    if state.loading { None } else { Some(state.is_authenticated()) }
}

/// Selected-salon precondition. Selection is local, so it is never pending.
pub fn require_salon(selection: &SalonSelection) -> Option<bool> {
    Some(selection.is_selected())
}

/// Location a guard refused, kept so sign-in can return there.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PendingRedirect {
    pub target: Option<String>,
}

impl PendingRedirect {
    /// Remember `location` unless it is blank or one of the auth routes.
    pub fn record(&mut self, location: &str) {
        if location.trim().is_empty() || is_auth_route(location) {
            return;
        }
        self.target = Some(location.to_owned());
    }

    /// Consume the remembered location, falling back to `/`.
    pub fn take_target(&mut self) -> String {
        self.target.take().unwrap_or_else(|| HOME_ROUTE.to_owned())
    }
}

/// Where the user should land after signing in. Consumes the recorded
/// location so a later sign-in does not reuse it.
pub fn take_post_login_target(pending: RwSignal<PendingRedirect>) -> String {
    pending.try_update(PendingRedirect::take_target).unwrap_or_else(|| HOME_ROUTE.to_owned())
}

/// Whether `location` is one of the pages served by the auth page.
pub fn is_auth_route(location: &str) -> bool {
    let path = location.split(['?', '#']).next().unwrap_or_default();
    matches!(path, "/login" | "/register" | "/recover" | "/recovery")
}

/// Rebuild the requested location from the router's path and query.
/// The router hands the query over without its leading `?`.
pub fn requested_location(pathname: &str, search: &str) -> String {
    let query = search.trim_start_matches('?');
    if query.is_empty() { pathname.to_owned() } else { format!("{pathname}?{query}") }
}

/// Backend entry point that starts an OAuth2 flow for `provider`.
pub fn social_login_url(api_origin: &str, provider: AuthProvider) -> String {
    format!("{api_origin}/oauth2/authorization/{}", provider.as_str().to_ascii_lowercase())
}
