//! Sidebar + header chrome for the three role portals.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each role tree in `app` renders `RoleShell`, which puts the route guard
//! around this layout and the nested route outlet. Sidebar entries come from
//! the access rule table so navigation can never point at another role's
//! area.

#[cfg(test)]
#[path = "portal_layout_test.rs"]
mod portal_layout_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::components::{A, Outlet};

use crate::access::nav_items;
use crate::components::route_guard::RouteGuard;
use crate::net::types::Role;
use crate::state::session::SessionState;
use crate::util::auth::use_auth;

/// Guarded layout for one role tree; nested routes render in the outlet.
#[component]
pub fn RoleShell(role: Role) -> impl IntoView {
    view! {
        <RouteGuard required_role=role>
            <PortalLayout role=role>
                <Outlet/>
            </PortalLayout>
        </RouteGuard>
    }
}

#[component]
pub fn PortalLayout(role: Role, children: Children) -> impl IntoView {
    let auth = use_auth();
    let name = move || auth.session.with(header_name);
    let initials = move || auth.session.with(|s| avatar_initials(&header_name(s)));
    let avatar = move || auth.session.with(|s| s.user.as_ref().and_then(|u| u.avatar.clone()));

    let on_logout = move |_| auth.logout();

    view! {
        <div class="portal-layout" data-role=role.as_str()>
            <aside class="portal-sidebar">
                <p class="portal-sidebar__brand">{portal_title(role)}</p>
                <nav class="portal-sidebar__nav">
                    <ul>
                        {nav_items(role)
                            .into_iter()
                            .map(|item| {
                                view! {
                                    <li class="portal-sidebar__item">
                                        <A href=item.path>{item.label}</A>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </nav>
            </aside>
            <div class="portal-main">
                <header class="portal-header">
                    {move || match avatar() {
                        Some(src) => view! { <img class="portal-header__avatar" src=src alt=""/> }.into_any(),
                        None => view! { <span class="portal-header__avatar">{initials}</span> }.into_any(),
                    }}
                    <span class="portal-header__name">{name}</span>
                    <span class="portal-header__role">{role.as_str()}</span>
                    <button class="portal-header__logout" on:click=on_logout>
                        "Log out"
                    </button>
                </header>
                <main class="portal-content">{children()}</main>
            </div>
        </div>
    }
}

pub(crate) fn portal_title(role: Role) -> &'static str {
    match role {
        Role::Admin => "Admin Portal",
        Role::Mentor => "Mentor Portal",
        Role::Learner => "Learning Space",
    }
}

/// Name shown in the header: full name, else email, else a neutral label.
pub(crate) fn header_name(session: &SessionState) -> String {
    let Some(user) = &session.user else {
        return "Guest".to_owned();
    };
    let full = user.full_name.trim();
    if full.is_empty() { user.email.clone() } else { full.to_owned() }
}

/// Up to two uppercase initials from a display name.
pub(crate) fn avatar_initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}
