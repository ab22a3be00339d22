//! Sign-in form state machine.
//!
//! `Idle --submit--> Submitting --reply--> Idle`, with field errors set
//! synchronously before any request and the result line set when the reply
//! lands.

#[cfg(test)]
#[path = "login_form_test.rs"]
mod login_form_test;

use crate::net::gateway::GatewayError;
use crate::net::types::{AuthResponse, LoginRequest};
use crate::state::form::{
    FieldErrors, FormSlot, FormStatus, ResultMessage, SubmitOutcome, is_blank, is_too_short,
};
use crate::state::session::SessionStore;

pub const IDENTIFIER_REQUIRED: &str = "Enter your email or username.";
pub const PASSWORD_REQUIRED: &str = "Enter your password.";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters.";
pub const LOGIN_SUCCEEDED: &str = "Signed in successfully.";
/// Deliberately says nothing about which credential was wrong.
pub const LOGIN_FAILED: &str = "Sign-in failed. Check your details and try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LoginField {
    Identifier,
    Password,
}

/// A single typed edit to the sign-in form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginInput {
    Identifier(String),
    Password(String),
    Remember(bool),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginFields {
    pub identifier: String,
    pub password: String,
    pub remember: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub fields: LoginFields,
    pub errors: FieldErrors<LoginField>,
    pub status: FormStatus,
    pub result: Option<ResultMessage>,
    /// Enforce the minimum password length on sign-in.
    pub strict_password: bool,
}

impl LoginForm {
    pub fn new(strict_password: bool) -> Self {
        Self { strict_password, ..Self::default() }
    }

    /// Start with a remembered identifier and the remember box ticked.
    pub fn with_remembered(strict_password: bool, identifier: Option<String>) -> Self {
        let mut form = Self::new(strict_password);
        if let Some(identifier) = identifier {
            form.fields.identifier = identifier;
            form.fields.remember = true;
        }
        form
    }

    pub fn apply(&mut self, input: LoginInput) {
        match input {
            LoginInput::Identifier(value) => self.fields.identifier = value,
            LoginInput::Password(value) => self.fields.password = value,
            LoginInput::Remember(value) => self.fields.remember = value,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    /// Evaluate every rule; one message per failing field.
    pub fn validate(&self) -> FieldErrors<LoginField> {
        let mut errors = FieldErrors::new();
        if is_blank(&self.fields.identifier) {
            errors.insert(LoginField::Identifier, IDENTIFIER_REQUIRED);
        }
        if is_blank(&self.fields.password) {
            errors.insert(LoginField::Password, PASSWORD_REQUIRED);
        } else if self.strict_password && is_too_short(&self.fields.password) {
            errors.insert(LoginField::Password, PASSWORD_TOO_SHORT);
        }
        errors
    }

    /// Validate and, if clean, move to `Submitting` and hand back the
    /// request to send. `None` means nothing may be sent.
    pub fn begin_submit(&mut self) -> Option<LoginRequest> {
        if self.is_submitting() {
            return None;
        }
        self.result = None;
        self.errors = self.validate();
        if !self.errors.is_empty() {
            return None;
        }
        self.status = FormStatus::Submitting;
        Some(LoginRequest { email: self.fields.identifier.trim().to_owned(), password: self.fields.password.clone() })
    }

    /// Settle a submission with the server's answer. An accepted reply that
    /// left nobody signed in counts as a failure. Returns whether the
    /// attempt succeeded.
    pub fn finish_submit(&mut self, result: &Result<AuthResponse, GatewayError>, signed_in: bool) -> bool {
        self.status = FormStatus::Idle;
        let (message, succeeded) = match result {
            Ok(response) if signed_in => (
                ResultMessage::success(response.message.clone().unwrap_or_else(|| LOGIN_SUCCEEDED.to_owned())),
                true,
            ),
            Ok(_) | Err(_) => (ResultMessage::error(LOGIN_FAILED), false),
        };
        self.result = Some(message);
        if succeeded {
            self.fields.password.clear();
        }
        succeeded
    }
}

/// Run one sign-in attempt end to end.
///
/// Validation failures and double submits return `Blocked` without any
/// network traffic. The session is only touched by a successful reply, and
/// `Succeeded` is only reported once a user is actually signed in.
pub async fn submit_login<S: FormSlot<LoginForm>>(slot: &S, session: &SessionStore) -> SubmitOutcome {
    let Some(Some(request)) = slot.with_form(LoginForm::begin_submit) else {
        return SubmitOutcome::Blocked;
    };
    let result = session.sign_in(&request).await;
    let signed_in = session.user().is_some();
    match slot.with_form(|form| form.finish_submit(&result, signed_in)) {
        None => SubmitOutcome::Detached,
        Some(true) => SubmitOutcome::Succeeded,
        Some(false) => SubmitOutcome::Failed,
    }
}

impl LoginFields {
    /// Identifier to keep for the next visit, if the user asked for it.
    pub fn remembered_identifier(&self) -> Option<String> {
        if self.remember && !is_blank(&self.identifier) { Some(self.identifier.trim().to_owned()) } else { None }
    }
}
