//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Role pages assume the surrounding `RoleShell` already
//! admitted the user.

pub mod dashboard;
pub mod directory;
pub mod login;
pub mod unauthorized;
