//! Networking modules for the REST backends.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` is the authenticated transport, `api` names the endpoints, `types`
//! defines the wire schema, and `sequence` guards pages against stale
//! responses.

pub mod api;
pub mod error;
pub mod http;
pub mod sequence;
pub mod types;
