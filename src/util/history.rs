//! [`History`] backed by the Leptos router.
//!
//! Pushes and replaces go through `use_navigate` so the router sees every
//! location change; the current path is read from `use_location`. Both are
//! owned by the reactive scope that built the adapter, and calls after that
//! scope is disposed are ignored.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::mode::History;

type NavigateFn = Box<dyn Fn(&str, NavigateOptions)>;

pub struct RouterHistory {
    navigate: StoredValue<NavigateFn, LocalStorage>,
    pathname: Memo<String>,
}

impl RouterHistory {
    /// Capture the router of the current component. Must be called inside
    /// a `<Router>`.
    pub fn from_router() -> Self {
        let navigate: NavigateFn = Box::new(use_navigate());
        Self { navigate: StoredValue::new_local(navigate), pathname: use_location().pathname }
    }

    fn go(&self, path: &str, options: NavigateOptions) {
        if self.navigate.try_with_value(|navigate| navigate(path, options)).is_none() {
            leptos::logging::log!("navigation to {path} dropped: router scope disposed");
        }
    }
}

impl History for RouterHistory {
    fn pathname(&self) -> String {
        self.pathname.try_get_untracked().unwrap_or_default()
    }

    fn push(&self, path: &str) {
        self.go(path, NavigateOptions::default());
    }

    fn replace(&self, path: &str) {
        self.go(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
    }
}
