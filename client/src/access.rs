//! Route access rules and the guard decision.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected path lives in exactly one role area (`/admin`, `/mentor`,
//! `/learner`) and requires exactly that role. The route guard component and
//! the entry redirects in `app` both defer to the functions here, so the
//! rendering layer never compares roles itself.
//!
//! Authorization failures are routing decisions, not errors: the outcome is a
//! redirect target, never a `Result`.

#[cfg(test)]
#[path = "access_test.rs"]
mod access_test;

use crate::net::types::Role;
use crate::state::session::SessionState;

pub const LOGIN_PATH: &str = "/login";
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";

/// A path and the role required to view it (`None` for public routes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteRule {
    pub path: &'static str,
    pub required_role: Option<Role>,
    /// Sidebar label.
    pub label: &'static str,
}

impl RouteRule {
    const fn public(path: &'static str, label: &'static str) -> Self {
        Self { path, required_role: None, label }
    }

    const fn protected(path: &'static str, role: Role, label: &'static str) -> Self {
        Self { path, required_role: Some(role), label }
    }
}

pub const ROUTE_RULES: &[RouteRule] = &[
    RouteRule::public(LOGIN_PATH, "Sign in"),
    RouteRule::public(UNAUTHORIZED_PATH, "Unauthorized"),
    RouteRule::protected("/admin/dashboard", Role::Admin, "Dashboard"),
    RouteRule::protected("/admin/users", Role::Admin, "Users"),
    RouteRule::protected("/mentor/dashboard", Role::Mentor, "Dashboard"),
    RouteRule::protected("/mentor/learners", Role::Mentor, "Learners"),
    RouteRule::protected("/learner/dashboard", Role::Learner, "Dashboard"),
    RouteRule::protected("/learner/learning", Role::Learner, "Learning packages"),
];

/// What a guarded route should do for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Storage has not been read yet; render a neutral placeholder.
    Loading,
    Redirect(&'static str),
    Render,
}

/// Decide whether a route requiring `required` may render.
pub fn evaluate(session: &SessionState, required: Role) -> GuardOutcome {
    if session.loading {
        return GuardOutcome::Loading;
    }
    match session.role() {
        None => GuardOutcome::Redirect(LOGIN_PATH),
        Some(role) if role != required => GuardOutcome::Redirect(UNAUTHORIZED_PATH),
        Some(_) => GuardOutcome::Render,
    }
}

/// Exact rule for `path`, ignoring a trailing slash.
pub fn rule_for(path: &str) -> Option<&'static RouteRule> {
    let path = normalize(path);
    ROUTE_RULES.iter().find(|rule| rule.path == path)
}

/// Role owning the area `path` falls in, whether or not the page exists.
pub fn area_role(path: &str) -> Option<Role> {
    let first = normalize(path).trim_start_matches('/').split('/').next()?;
    match first {
        "admin" => Some(Role::Admin),
        "mentor" => Some(Role::Mentor),
        "learner" => Some(Role::Learner),
        _ => None,
    }
}

/// Home page of each role's portal.
pub fn landing_path(role: Role) -> &'static str {
    match role {
        Role::Admin => "/admin/dashboard",
        Role::Mentor => "/mentor/dashboard",
        Role::Learner => "/learner/dashboard",
    }
}

/// Target for `/` and unknown paths: the role landing page, or `/login`.
/// `None` while the session is still loading.
pub fn entry_redirect(session: &SessionState) -> Option<&'static str> {
    if session.loading {
        return None;
    }
    Some(session.role().map_or(LOGIN_PATH, landing_path))
}

/// Where `/login` should send a visitor who is already signed in.
pub fn login_redirect(session: &SessionState) -> Option<&'static str> {
    if session.loading {
        return None;
    }
    session.role().map(landing_path)
}

/// Sidebar entries for a role, in table order.
pub fn nav_items(role: Role) -> Vec<&'static RouteRule> {
    ROUTE_RULES
        .iter()
        .filter(|rule| rule.required_role == Some(role))
        .collect()
}

/// Full navigation outcome for `path`, as the router + guards resolve it.
pub fn resolve(session: &SessionState, path: &str) -> GuardOutcome {
    match rule_for(path) {
        Some(RouteRule { required_role: None, .. }) => GuardOutcome::Render,
        Some(RouteRule { required_role: Some(role), .. }) => evaluate(session, *role),
        None => entry_redirect(session).map_or(GuardOutcome::Loading, GuardOutcome::Redirect),
    }
}

fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    if path.len() > 1 { path.trim_end_matches('/') } else { path }
}
