//! Shared pieces of the auth form state machines.
//!
//! DESIGN
//! ======
//! A form is a plain value (`LoginForm`, `RegisterForm`) living in some
//! owner-controlled slot. Async submission never holds the form across an
//! await; it re-enters the slot through [`FormSlot::with_form`], which
//! returns `None` once the owner is gone, so a reply that arrives after the
//! form unmounted is dropped instead of written into dead state.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::cell::RefCell;
use std::collections::BTreeMap;

use leptos::prelude::{RwSignal, Update};

/// Minimum password length enforced on registration and strict sign-in.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Submission lifecycle of one form instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
}

/// Whether the result line reports success or failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

/// Status line shown under a form after a submission settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultMessage {
    pub tone: Tone,
    pub text: String,
}

impl ResultMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self { tone: Tone::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { tone: Tone::Error, text: text.into() }
    }
}

/// One message per offending field, keyed by the form's field enum.
pub type FieldErrors<F> = BTreeMap<F, &'static str>;

/// How a submission attempt ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed or a submission was already in flight; no request.
    Blocked,
    Succeeded,
    Failed,
    /// The form went away before the reply arrived.
    Detached,
}

/// Owner-controlled storage for a form value.
pub trait FormSlot<F> {
    /// Run `f` against the live form; `None` if the form no longer exists.
    fn with_form<R>(&self, f: impl FnOnce(&mut F) -> R) -> Option<R>;
}

impl<F: Send + Sync + 'static> FormSlot<F> for RwSignal<F> {
    fn with_form<R>(&self, f: impl FnOnce(&mut F) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl<F> FormSlot<F> for RefCell<F> {
    fn with_form<R>(&self, f: impl FnOnce(&mut F) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// `true` when the trimmed value is empty.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn is_too_short(password: &str) -> bool {
    password.chars().count() < MIN_PASSWORD_LEN
}

/// Loose `local@domain.tld` shape check: one `@`, non-empty local part,
/// a dotted domain with non-empty labels, no whitespace.
pub fn is_email_shaped(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}
