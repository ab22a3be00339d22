//! Auth page mode and its binding to the location.
//!
//! DESIGN
//! ======
//! The mode is always derivable from the path ([`resolve_mode`]), and every
//! explicit mode change writes the location. Once `navigate` has set a mode
//! it is authoritative: a disagreeing path is corrected with a history
//! `replace`, never the other way round.

#[cfg(test)]
#[path = "mode_test.rs"]
mod mode_test;

use std::sync::Arc;

use leptos::prelude::*;

/// Which auth panel is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
    Recover,
}

impl AuthMode {
    pub const ALL: [Self; 3] = [Self::Login, Self::Register, Self::Recover];

    /// Canonical location for this mode.
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Recover => "/recover",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Login => "Sign in",
            Self::Register => "Create account",
            Self::Recover => "Recover account",
        }
    }
}

/// Derive the mode from a location path. `register` is checked before
/// `recover` (which also matches `/recovery`); anything else is login.
pub fn resolve_mode(pathname: &str) -> AuthMode {
    if pathname.contains("register") {
        AuthMode::Register
    } else if pathname.contains("recover") {
        AuthMode::Recover
    } else {
        AuthMode::Login
    }
}

/// The slice of browser history the router needs.
pub trait History: Send + Sync {
    fn pathname(&self) -> String;
    /// Add a history entry.
    fn push(&self, path: &str);
    /// Rewrite the current entry.
    fn replace(&self, path: &str);
}

/// Keeps the in-memory mode and the location in step.
#[derive(Clone)]
pub struct ModeRouter {
    history: Arc<dyn History>,
    mode: RwSignal<AuthMode>,
}

impl ModeRouter {
    /// Build a router whose initial mode comes from the current location.
    pub fn new(history: Arc<dyn History>) -> Self {
        let mode = RwSignal::new(resolve_mode(&history.pathname()));
        Self { history, mode }
    }

    /// Reactive view of the mode; changes only when the mode differs.
    pub fn mode(&self) -> ReadSignal<AuthMode> {
        self.mode.read_only()
    }

    pub fn current_mode(&self) -> AuthMode {
        self.mode.try_get_untracked().unwrap_or_default()
    }

    /// Switch to `mode`, pushing its path unless the location is already
    /// there.
    pub fn navigate(&self, mode: AuthMode) {
        let path = mode.path();
        if self.history.pathname() != path {
            self.history.push(path);
        }
        self.set_mode(mode);
    }

    /// Follow a location change made outside the router (back/forward).
    pub fn handle_location_change(&self) {
        let mode = resolve_mode(&self.history.pathname());
        self.set_mode(mode);
        self.reconcile();
    }

    /// Rewrite the location if it disagrees with the current mode.
    /// Returns whether a correction was made.
    pub fn reconcile(&self) -> bool {
        let path = self.current_mode().path();
        if self.history.pathname() == path {
            return false;
        }
        self.history.replace(path);
        true
    }

    fn set_mode(&self, mode: AuthMode) {
        self.mode.maybe_update(|current| {
            let changed = *current != mode;
            *current = mode;
            changed
        });
    }
}
