//! Account-creation form state machine.

#[cfg(test)]
#[path = "register_form_test.rs"]
mod register_form_test;

use crate::net::gateway::GatewayError;
use crate::net::types::{AuthResponse, RegisterRequest};
use crate::state::form::{
    FieldErrors, FormSlot, FormStatus, ResultMessage, SubmitOutcome, is_blank, is_email_shaped, is_too_short,
};
use crate::state::session::SessionStore;

pub const EMAIL_REQUIRED: &str = "Enter your email.";
pub const EMAIL_INVALID: &str = "Enter a valid email address.";
pub const DISPLAY_NAME_REQUIRED: &str = "Enter a display name.";
pub const PASSWORD_REQUIRED: &str = "Enter a password.";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters.";
pub const PASSWORD_MISMATCH: &str = "Passwords do not match.";
pub const REGISTER_SUCCEEDED: &str = "Account created.";
pub const REGISTER_FAILED: &str = "Sign-up failed. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RegisterField {
    Email,
    DisplayName,
    Password,
    ConfirmPassword,
}

/// A single typed edit to the registration form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegisterInput {
    Email(String),
    DisplayName(String),
    Password(String),
    ConfirmPassword(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFields {
    pub email: String,
    pub display_name: String,
    pub password: String,
    pub confirm_password: String,
}

/// What the page should do once the success message has been shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AfterRegister {
    /// The session is live; leave the auth page.
    EnterApp,
    /// The backend expects a separate sign-in.
    SignIn,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub fields: RegisterFields,
    pub errors: FieldErrors<RegisterField>,
    pub status: FormStatus,
    pub result: Option<ResultMessage>,
    pub next: Option<AfterRegister>,
}

impl RegisterForm {
    pub fn apply(&mut self, input: RegisterInput) {
        match input {
            RegisterInput::Email(value) => self.fields.email = value,
            RegisterInput::DisplayName(value) => self.fields.display_name = value,
            RegisterInput::Password(value) => self.fields.password = value,
            RegisterInput::ConfirmPassword(value) => self.fields.confirm_password = value,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    /// Evaluate every rule; one message per failing field.
    pub fn validate(&self) -> FieldErrors<RegisterField> {
        let fields = &self.fields;
        let mut errors = FieldErrors::new();
        if is_blank(&fields.email) {
            errors.insert(RegisterField::Email, EMAIL_REQUIRED);
        } else if !is_email_shaped(&fields.email) {
            errors.insert(RegisterField::Email, EMAIL_INVALID);
        }
        if is_blank(&fields.display_name) {
            errors.insert(RegisterField::DisplayName, DISPLAY_NAME_REQUIRED);
        }
        if is_blank(&fields.password) {
            errors.insert(RegisterField::Password, PASSWORD_REQUIRED);
        } else if is_too_short(&fields.password) {
            errors.insert(RegisterField::Password, PASSWORD_TOO_SHORT);
        }
        if fields.password != fields.confirm_password {
            errors.insert(RegisterField::ConfirmPassword, PASSWORD_MISMATCH);
        }
        errors
    }

    pub fn begin_submit(&mut self) -> Option<RegisterRequest> {
        if self.is_submitting() {
            return None;
        }
        self.result = None;
        self.next = None;
        self.errors = self.validate();
        if !self.errors.is_empty() {
            return None;
        }
        self.status = FormStatus::Submitting;
        Some(RegisterRequest {
            email: self.fields.email.trim().to_owned(),
            password: self.fields.password.clone(),
            display_name: self.fields.display_name.trim().to_owned(),
        })
    }

    /// Settle a submission. A server-supplied message is shown on failure
    /// when present (e.g. a duplicate email); otherwise a generic one.
    /// `signed_in` reports whether the session is live after the reply.
    pub fn finish_submit(&mut self, result: &Result<AuthResponse, GatewayError>, signed_in: bool) {
        self.status = FormStatus::Idle;
        match result {
            Ok(response) => {
                self.result = Some(ResultMessage::success(
                    response.message.clone().unwrap_or_else(|| REGISTER_SUCCEEDED.to_owned()),
                ));
                self.next = Some(if signed_in { AfterRegister::EnterApp } else { AfterRegister::SignIn });
                self.fields = RegisterFields::default();
            }
            Err(e) => {
                let text = e.server_message().unwrap_or(REGISTER_FAILED);
                self.result = Some(ResultMessage::error(text));
            }
        }
    }
}

/// Run one registration attempt end to end.
pub async fn submit_register<S: FormSlot<RegisterForm>>(slot: &S, session: &SessionStore) -> SubmitOutcome {
    let Some(Some(request)) = slot.with_form(RegisterForm::begin_submit) else {
        return SubmitOutcome::Blocked;
    };
    let result = session.sign_up(&request).await;
    let succeeded = result.is_ok();
    let signed_in = session.user().is_some();
    if slot.with_form(|form| form.finish_submit(&result, signed_in)).is_none() {
        return SubmitOutcome::Detached;
    }
    if succeeded { SubmitOutcome::Succeeded } else { SubmitOutcome::Failed }
}
