//! Reusable UI building blocks for auth and protected views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages compose these components; state lives in `state` and reaches them
//! through Leptos context or props.

pub mod form_feedback;
pub mod guard;
pub mod login_panel;
pub mod recovery_panel;
pub mod register_panel;
