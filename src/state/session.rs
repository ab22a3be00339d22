//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The [`SessionStore`] is the single owner of "who is signed in". Route
//! guards, the auth page and the dashboard read its [`SessionStore::state`]
//! signal; only the store's own operations write it.
//!
//! DESIGN
//! ======
//! Each hydration takes a ticket from a monotonically increasing epoch.
//! Only the holder of the latest ticket may settle the state, and
//! `establish`/`clear` bump the epoch too, so an older `/auth/me` reply
//! arriving late can neither overwrite a newer outcome nor leave `loading`
//! stuck at `true`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::net::api;
use crate::net::gateway::{GatewayError, HttpGateway};
use crate::net::types::{AuthResponse, LoginRequest, RegisterRequest, UserIdentity};

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<UserIdentity>,
    pub loading: bool,
}

impl Default for SessionState {
    /// Application-start state: nobody known yet, hydration pending.
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Shared handle to the session. Cloning shares the same state.
#[derive(Clone)]
pub struct SessionStore {
    gateway: Arc<dyn HttpGateway>,
    state: RwSignal<SessionState>,
    epoch: StoredValue<u64>,
}

impl SessionStore {
    /// Create the store and its signals under the current reactive owner.
    pub fn new(gateway: Arc<dyn HttpGateway>) -> Self {
        Self { gateway, state: RwSignal::new(SessionState::default()), epoch: StoredValue::new(0) }
    }

    /// Reactive view of the session for guards and pages.
    pub fn state(&self) -> ReadSignal<SessionState> {
        self.state.read_only()
    }

    /// Current state without tracking. A disposed store reads as the
    /// application-start state.
    pub fn snapshot(&self) -> SessionState {
        self.state.try_get_untracked().unwrap_or_default()
    }

    pub fn user(&self) -> Option<UserIdentity> {
        self.state.try_with_untracked(|s| s.user.clone()).flatten()
    }

    pub fn is_loading(&self) -> bool {
        self.state.try_with_untracked(|s| s.loading).unwrap_or(true)
    }

    /// Query `/auth/me` and settle the session from the answer.
    ///
    /// Any failure (401, transport, decode) means "not signed in" and is not
    /// surfaced. Returns whether a user is present once this call settles.
    pub async fn hydrate(&self) -> bool {
        let ticket = self.begin_hydration();
        let user = match api::fetch_current_user(self.gateway.as_ref()).await {
            Ok(user) => Some(user),
            Err(GatewayError::Unauthorized) => None,
            Err(e) => {
                leptos::logging::log!("session hydration failed: {e}");
                None
            }
        };
        self.settle_hydration(ticket, user);
        self.snapshot().user.is_some()
    }

    /// Re-check the server session, e.g. after an OAuth redirect set cookies.
    pub async fn refresh_user(&self) -> bool {
        self.hydrate().await
    }

    /// Adopt an identity received from a login/register reply.
    pub fn establish(&self, identity: UserIdentity) {
        self.bump_epoch();
        self.state.set(SessionState { user: Some(identity), loading: false });
    }

    /// Sign out. The server call is best-effort; the local session is
    /// cleared whatever it returns.
    pub async fn clear(&self) {
        if let Err(e) = api::logout(self.gateway.as_ref()).await {
            leptos::logging::warn!("logout request failed: {e}");
        }
        self.bump_epoch();
        let next = SessionState { user: None, loading: false };
        self.state.maybe_update(|state| {
            let changed = *state != next;
            *state = next;
            changed
        });
    }

    /// `POST /auth/login`; establishes the session on success only.
    pub async fn sign_in(&self, request: &LoginRequest) -> Result<AuthResponse, GatewayError> {
        let response = api::login(self.gateway.as_ref(), request).await?;
        self.adopt(&response).await;
        Ok(response)
    }

    /// `POST /auth/register`; establishes the session on success only.
    pub async fn sign_up(&self, request: &RegisterRequest) -> Result<AuthResponse, GatewayError> {
        let response = api::register(self.gateway.as_ref(), request).await?;
        self.adopt(&response).await;
        Ok(response)
    }

    async fn adopt(&self, response: &AuthResponse) {
        match &response.user {
            Some(user) => self.establish(user.clone()),
            // Cookie-only replies: the identity lives behind /auth/me.
            None => {
                self.hydrate().await;
            }
        }
    }

    fn bump_epoch(&self) -> u64 {
        self.epoch
            .try_update_value(|epoch| {
                *epoch += 1;
                *epoch
            })
            .unwrap_or_default()
    }

    fn begin_hydration(&self) -> u64 {
        let ticket = self.bump_epoch();
        self.state.maybe_update(|state| {
            let was_loading = state.loading;
            state.loading = true;
            !was_loading
        });
        ticket
    }

    fn settle_hydration(&self, ticket: u64, user: Option<UserIdentity>) {
        if self.epoch.try_get_value() != Some(ticket) {
            return;
        }
        self.state.set(SessionState { user, loading: false });
    }
}
