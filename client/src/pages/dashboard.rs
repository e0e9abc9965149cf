//! Landing page of each role portal.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::access::{RouteRule, landing_path, nav_items};
use crate::net::types::Role;
use crate::state::session::SessionState;
use crate::util::auth::use_auth;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! { <DashboardPage role=Role::Admin/> }
}

#[component]
pub fn MentorDashboardPage() -> impl IntoView {
    view! { <DashboardPage role=Role::Mentor/> }
}

#[component]
pub fn LearnerDashboardPage() -> impl IntoView {
    view! { <DashboardPage role=Role::Learner/> }
}

/// Greeting plus a card per section of the role's portal.
#[component]
pub fn DashboardPage(role: Role) -> impl IntoView {
    let auth = use_auth();
    let greet = move || auth.session.with(greeting);

    view! {
        <section class="dashboard-page">
            <h1 class="dashboard-page__greeting">{greet}</h1>
            <p class="dashboard-page__intro">{dashboard_intro(role)}</p>
            <div class="dashboard-page__cards">
                {dashboard_sections(role)
                    .into_iter()
                    .map(|section| {
                        view! {
                            <div class="dashboard-card">
                                <A href=section.path>{section.label}</A>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

/// "Welcome back, <first name>" for the signed-in user.
pub(crate) fn greeting(session: &SessionState) -> String {
    let first = session
        .user
        .as_ref()
        .and_then(|u| u.full_name.split_whitespace().next())
        .unwrap_or("there");
    format!("Welcome back, {first}")
}

pub(crate) fn dashboard_intro(role: Role) -> &'static str {
    match role {
        Role::Admin => "Manage users, packages and platform settings.",
        Role::Mentor => "Review your learners and grade their assessments.",
        Role::Learner => "Pick up where you left off.",
    }
}

/// Sections linked from the dashboard: the role's pages minus the dashboard.
pub(crate) fn dashboard_sections(role: Role) -> Vec<&'static RouteRule> {
    let home = landing_path(role);
    nav_items(role).into_iter().filter(|rule| rule.path != home).collect()
}
