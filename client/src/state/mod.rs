//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is the single source of truth for who is signed in; `directory`
//! is the per-page fetch state reused by the list pages.

pub mod directory;
pub mod session;
