//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the portal chrome and access gates while reading shared
//! session state from the auth context.

pub mod fetch_status;
pub mod portal_layout;
pub mod route_guard;
