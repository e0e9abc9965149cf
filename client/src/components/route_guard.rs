//! Role gate wrapped around every protected route.
//!
//! SYSTEM CONTEXT
//! ==============
//! The guard holds no state of its own. It re-evaluates `access::evaluate`
//! whenever the session signal changes and either waits, redirects, or renders
//! its children.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::components::Redirect;

use crate::access::{self, GuardOutcome};
use crate::net::types::Role;
use crate::util::auth::use_auth;

/// Neutral placeholder shown until storage has been read.
#[component]
pub fn SessionPending() -> impl IntoView {
    view! { <div class="session-pending" aria-busy="true">"Loading..."</div> }
}

/// Render `children` only for a signed-in user holding `required_role`.
#[component]
pub fn RouteGuard(required_role: Role, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    move || match access::evaluate(&auth.session.get(), required_role) {
        GuardOutcome::Loading => view! { <SessionPending/> }.into_any(),
        GuardOutcome::Redirect(target) => view! { <Redirect path=target/> }.into_any(),
        GuardOutcome::Render => children().into_any(),
    }
}

/// Send `/` and unmatched paths to the role landing page or `/login`.
#[component]
pub fn EntryRedirect() -> impl IntoView {
    let auth = use_auth();
    move || match access::entry_redirect(&auth.session.get()) {
        Some(target) => view! { <Redirect path=target/> }.into_any(),
        None => view! { <SessionPending/> }.into_any(),
    }
}
