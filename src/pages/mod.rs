//! Route-level page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages map URL routes to composed UI trees and bind route lifecycle to state
//! effects.

pub mod auth;
pub mod dashboard;
pub mod oauth;
pub mod salon;
