//! Email + password login page.
//!
//! ERROR HANDLING
//! ==============
//! The auth context returns login failures untouched. This page turns them
//! into one inline message, preferring the server's `message` and falling back
//! to a generic line.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::access;
use crate::net::error::ApiError;
use crate::net::types::LoginCredentials;
use crate::util::auth::use_auth;

pub const LOGIN_FAILED_FALLBACK: &str = "Login failed. Please try again.";

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Signed-in visitors (restored or just logged in) go to their portal.
    Effect::new(move || {
        if let Some(target) = access::login_redirect(&auth.session.get()) {
            navigate(target, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_login_input(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        leptos::task::spawn_local(async move {
            match auth.login(credentials).await {
                Ok(_) => info.set(String::new()),
                Err(e) => {
                    leptos::logging::warn!("login failed: {e}");
                    info.set(login_error_message(&e));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"English Hub"</h1>
                <p class="login-card__subtitle">"Sign in to your portal"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        autocomplete="username"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}

/// Trim the email and require both fields before calling the backend.
pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<LoginCredentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.trim().is_empty() {
        return Err("Enter both email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok(LoginCredentials { email: email.to_owned(), password: password.to_owned() })
}

pub(crate) fn login_error_message(err: &ApiError) -> String {
    err.user_message(LOGIN_FAILED_FALLBACK).to_owned()
}
