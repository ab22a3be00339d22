//! Client-side application state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Session and mode stores are shared handles whose state lives in signals
//! they own. The session store is provided through Leptos context; form and
//! selection values are plain data held in signals by the components that
//! own them.

pub mod form;
pub mod login_form;
pub mod mode;
pub mod register_form;
pub mod salon;
pub mod session;
