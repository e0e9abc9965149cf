//! List pages: admin user directory, mentor learners, learner packages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each page fetches once on mount and again on retry. Fetches take a
//! `RequestSequence` ticket so a slow earlier response can never overwrite a
//! newer one. Session expiry is handled by the API client's 401 hook, not
//! here.

#[cfg(test)]
#[path = "directory_test.rs"]
mod directory_test;

use std::future::Future;

use leptos::prelude::*;

use crate::components::fetch_status::FetchStatus;
use crate::config::Service;
use crate::net::api;
use crate::net::error::ApiError;
use crate::net::sequence::RequestSequence;
use crate::net::types::{LearningPackage, UserProfile};
use crate::state::directory::DirectoryState;
use crate::util::auth::use_auth;

#[component]
pub fn UsersDirectoryPage() -> impl IntoView {
    let auth = use_auth();
    let state = RwSignal::new(DirectoryState::<UserProfile>::default());
    let sequence = RequestSequence::new();
    let reload = move || {
        load_into(state, sequence.clone(), move || async move {
            api::list_users(&auth.client(Service::Auth)).await
        });
    };

    view! {
        <section class="directory-page">
            <h1>"Users"</h1>
            <UserTable state=state reload=reload empty_label="No users yet."/>
        </section>
    }
}

#[component]
pub fn LearnersDirectoryPage() -> impl IntoView {
    let auth = use_auth();
    let state = RwSignal::new(DirectoryState::<UserProfile>::default());
    let sequence = RequestSequence::new();
    let reload = move || {
        load_into(state, sequence.clone(), move || async move {
            api::list_mentor_learners(&auth.client(Service::Assessment)).await
        });
    };

    view! {
        <section class="directory-page">
            <h1>"My learners"</h1>
            <UserTable state=state reload=reload empty_label="No learners assigned yet."/>
        </section>
    }
}

#[component]
pub fn LearningPackagesPage() -> impl IntoView {
    let auth = use_auth();
    let state = RwSignal::new(DirectoryState::<LearningPackage>::default());
    let sequence = RequestSequence::new();
    let reload = move || {
        load_into(state, sequence.clone(), move || async move {
            api::list_learning_packages(&auth.client(Service::Learning)).await
        });
    };
    let on_retry = retry_callback(reload);

    view! {
        <section class="directory-page">
            <h1>"Learning packages"</h1>
            <FetchStatus
                loading=Signal::derive(move || state.with(|s| s.loading))
                error=Signal::derive(move || state.with(|s| s.error.clone()))
                on_retry=on_retry
            />
            <Show when=move || state.with(DirectoryState::is_empty)>
                <p class="directory-page__empty">"No packages available yet."</p>
            </Show>
            <ul class="package-list">
                <For
                    each=move || state.with(|s| s.items.clone())
                    key=|pkg| pkg.id.clone()
                    children=move |pkg: LearningPackage| {
                        view! {
                            <li class="package-list__item">
                                <span class="package-list__title">{pkg.title.clone()}</span>
                                <span class="package-list__level">{level_label(pkg.level.as_deref())}</span>
                                <p class="package-list__description">{pkg.description.clone().unwrap_or_default()}</p>
                            </li>
                        }
                    }
                />
            </ul>
        </section>
    }
}

#[component]
fn UserTable<F>(state: RwSignal<DirectoryState<UserProfile>>, reload: F, empty_label: &'static str) -> impl IntoView
where
    F: Fn() + Clone + Send + Sync + 'static,
{
    let on_retry = retry_callback(reload);

    view! {
        <FetchStatus
            loading=Signal::derive(move || state.with(|s| s.loading))
            error=Signal::derive(move || state.with(|s| s.error.clone()))
            on_retry=on_retry
        />
        <Show when=move || state.with(DirectoryState::is_empty)>
            <p class="directory-page__empty">{empty_label}</p>
        </Show>
        <table class="directory-table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Email"</th>
                    <th>"Role"</th>
                    <th>"Status"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || state.with(|s| s.items.clone())
                    key=|user| user.id.clone()
                    children=move |user: UserProfile| {
                        view! {
                            <tr>
                                <td>{user.full_name.clone()}</td>
                                <td>{user.email.clone()}</td>
                                <td>{user.role.as_str()}</td>
                                <td>{status_label(user.status.as_deref())}</td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}

/// Run `reload` now (after mount) and hand back a retry callback for it.
fn retry_callback<F>(reload: F) -> Callback<()>
where
    F: Fn() + Clone + Send + Sync + 'static,
{
    let initial = reload.clone();
    Effect::new(move || initial());
    Callback::new(move |()| reload())
}

/// Start a fetch, applying its result only if no newer fetch began meanwhile.
fn load_into<T, F, Fut>(state: RwSignal<DirectoryState<T>>, sequence: RequestSequence, fetch: F)
where
    T: Send + Sync + 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    let ticket = sequence.begin();
    state.update(DirectoryState::begin);
    leptos::task::spawn_local(async move {
        let result = fetch().await;
        match sequence.accept(ticket, result) {
            Some(result) => state.update(|s| s.finish(result)),
            None => leptos::logging::log!("dropping stale list response"),
        }
    });
}

pub(crate) fn status_label(status: Option<&str>) -> String {
    match status.map(str::trim) {
        Some(s) if !s.is_empty() => {
            let mut chars = s.chars();
            chars
                .next()
                .map(|first| first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect())
                .unwrap_or_default()
        }
        _ => "Unknown".to_owned(),
    }
}

pub(crate) fn level_label(level: Option<&str>) -> String {
    level
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map_or_else(|| "All levels".to_owned(), str::to_uppercase)
}
