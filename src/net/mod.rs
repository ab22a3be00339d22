//! Networking modules for the auth REST contract.
//!
//! SYSTEM CONTEXT
//! ==============
//! `gateway` owns transport and credential handling, `api` maps endpoints to
//! typed calls, and `types` defines the wire schema.

pub mod api;
pub mod gateway;
pub mod types;
