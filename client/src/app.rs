//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Three role areas hang off the root router, one `ParentRoute` each. The
//! parent view is a `RoleShell`, which guards the whole subtree and draws the
//! shared sidebar/header around the child page. Anything unmatched falls back
//! to `EntryRedirect`, which picks login or the caller's landing page.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::portal_layout::RoleShell;
use crate::components::route_guard::EntryRedirect;
use crate::config::PortalConfig;
use crate::net::types::Role;
use crate::pages::dashboard::{AdminDashboardPage, LearnerDashboardPage, MentorDashboardPage};
use crate::pages::directory::{LearnersDirectoryPage, LearningPackagesPage, UsersDirectoryPage};
use crate::pages::login::LoginPage;
use crate::pages::unauthorized::UnauthorizedPage;
use crate::util::auth::provide_auth_context;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth context and sets up client-side routing for the three
/// role portals.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_auth_context(PortalConfig::from_build_env());

    view! {
        <Stylesheet id="leptos" href="/pkg/portal.css"/>
        <Title text="English Hub"/>

        <Router>
            <div class="portal-root">
                <Routes fallback=|| view! { <EntryRedirect/> }>
                    <Route path=StaticSegment("") view=EntryRedirect/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("unauthorized") view=UnauthorizedPage/>

                    <ParentRoute path=StaticSegment("admin") view=AdminShell>
                        <Route path=StaticSegment("dashboard") view=AdminDashboardPage/>
                        <Route path=StaticSegment("users") view=UsersDirectoryPage/>
                    </ParentRoute>

                    <ParentRoute path=StaticSegment("mentor") view=MentorShell>
                        <Route path=StaticSegment("dashboard") view=MentorDashboardPage/>
                        <Route path=StaticSegment("learners") view=LearnersDirectoryPage/>
                    </ParentRoute>

                    <ParentRoute path=StaticSegment("learner") view=LearnerShell>
                        <Route path=StaticSegment("dashboard") view=LearnerDashboardPage/>
                        <Route path=StaticSegment("learning") view=LearningPackagesPage/>
                    </ParentRoute>
                </Routes>
            </div>
        </Router>
    }
}

#[component]
fn AdminShell() -> impl IntoView {
    view! { <RoleShell role=Role::Admin/> }
}

#[component]
fn MentorShell() -> impl IntoView {
    view! { <RoleShell role=Role::Mentor/> }
}

#[component]
fn LearnerShell() -> impl IntoView {
    view! { <RoleShell role=Role::Learner/> }
}
