use super::*;
use crate::net::gateway::GatewayError;
use crate::state::session::SessionStore;
use crate::testing::{MockGateway, sample_user};
use futures::executor::block_on;

fn session(user: bool, loading: bool) -> SessionState {
    SessionState { user: user.then(sample_user), loading }
}

// =============================================================
// evaluate_guard
// =============================================================

#[test]
fn unknown_condition_is_pending() {
    assert_eq!(evaluate_guard(None, LOGIN_ROUTE, "/"), GuardDecision::Pending);
}

#[test]
fn satisfied_condition_allows() {
    assert_eq!(evaluate_guard(Some(true), LOGIN_ROUTE, "/"), GuardDecision::Allow);
}

#[test]
fn refused_condition_redirects_with_origin() {
    assert_eq!(
        evaluate_guard(Some(false), LOGIN_ROUTE, "/salon"),
        GuardDecision::Redirect { to: LOGIN_ROUTE, from: "/salon".to_owned() }
    );
}

// =============================================================
// Preconditions
// =============================================================

#[test]
fn session_guard_waits_while_loading() {
    // Even a user left over from before a refresh is not trusted yet.
    assert_eq!(require_session(&session(true, true)), None);
    assert_eq!(require_session(&session(false, true)), None);
}

#[test]
fn session_guard_after_hydration() {
    assert_eq!(require_session(&session(true, false)), Some(true));
    assert_eq!(require_session(&session(false, false)), Some(false));
}

#[test]
fn loading_session_never_renders_protected_view() {
    let decision = evaluate_guard(require_session(&SessionState::default()), LOGIN_ROUTE, "/");
    assert_eq!(decision, GuardDecision::Pending);
}

#[test]
fn unauthorized_hydration_sends_protected_route_to_login() {
    let gateway = MockGateway::new();
    gateway.reply(Err(GatewayError::Unauthorized));
    let store = SessionStore::new(gateway.clone());

    assert_eq!(evaluate_guard(require_session(&store.snapshot()), LOGIN_ROUTE, "/"), GuardDecision::Pending);
    block_on(store.hydrate());

    assert_eq!(
        evaluate_guard(require_session(&store.snapshot()), LOGIN_ROUTE, "/"),
        GuardDecision::Redirect { to: LOGIN_ROUTE, from: "/".to_owned() }
    );
}

#[test]
fn salon_guard_follows_selection() {
    let mut selection = SalonSelection::default();
    assert_eq!(
        evaluate_guard(require_salon(&selection), SALON_SELECTION_ROUTE, "/salon"),
        GuardDecision::Redirect { to: SALON_SELECTION_ROUTE, from: "/salon".to_owned() }
    );
    selection.select("s1");
    assert_eq!(evaluate_guard(require_salon(&selection), SALON_SELECTION_ROUTE, "/salon"), GuardDecision::Allow);
}

// =============================================================
// PendingRedirect
// =============================================================

#[test]
fn take_target_defaults_home() {
    assert_eq!(PendingRedirect::default().take_target(), "/");
}

#[test]
fn recorded_location_is_taken_once() {
    let mut pending = PendingRedirect::default();
    pending.record("/salon?tab=staff");
    assert_eq!(pending.take_target(), "/salon?tab=staff");
    assert_eq!(pending.take_target(), "/");
}

#[test]
fn take_post_login_target_consumes_signal_value() {
    let owner = leptos::prelude::Owner::new();
    owner.with(|| {
        let pending = RwSignal::new(PendingRedirect::default());
        pending.update(|p| p.record("/salons"));
        assert_eq!(take_post_login_target(pending), "/salons");
        assert_eq!(take_post_login_target(pending), "/");
    });
}

#[test]
fn auth_routes_are_never_recorded() {
    let mut pending = PendingRedirect::default();
    pending.record("/salons");
    for location in ["/login", "/register?x=1", "/recovery", "/recover", "  "] {
        pending.record(location);
    }
    assert_eq!(pending.target.as_deref(), Some("/salons"));
}

#[test]
fn is_auth_route_matches_only_auth_pages() {
    assert!(is_auth_route("/login"));
    assert!(is_auth_route("/recovery#top"));
    assert!(!is_auth_route("/"));
    assert!(!is_auth_route("/salon"));
}

#[test]
fn requested_location_restores_query_separator() {
    assert_eq!(requested_location("/salon", "tab=staff"), "/salon?tab=staff");
    assert_eq!(requested_location("/salon", "?tab=staff"), "/salon?tab=staff");
    assert_eq!(requested_location("/salon", ""), "/salon");
}

#[test]
fn requested_location_with_query_is_taken_back_intact() {
    let mut pending = PendingRedirect::default();
    pending.record(&requested_location("/salons", "page=2"));
    assert_eq!(pending.take_target(), "/salons?page=2");
}

// =============================================================
// Social login
// =============================================================

#[test]
fn social_login_url_uses_lowercase_provider() {
    assert_eq!(social_login_url("", AuthProvider::Kakao), "/oauth2/authorization/kakao");
    assert_eq!(
        social_login_url("https://api.example.com", AuthProvider::Google),
        "https://api.example.com/oauth2/authorization/google"
    );
}
