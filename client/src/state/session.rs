//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionState` is the single in-memory record of who is signed in. The
//! auth context owns it as a signal; route guards and pages only read it.
//! Storage is a passive mirror: read once on mount, written on login, wiped
//! on logout.
//!
//! The flows here are framework-free so they can be driven against any
//! `KeyValueStore` / `Transport` pair.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::api;
use crate::net::error::ApiError;
use crate::net::http::{ApiClient, Transport};
use crate::net::types::{LoginCredentials, LoginResponse, Role, UserProfile};
use crate::util::storage::{CredentialStore, KeyValueStore};

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<UserProfile>,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    /// True until the initial storage read has completed.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { user: None, access_token: None, refresh_token: None, loading: true }
    }
}

impl SessionState {
    /// Settled, signed-out state.
    pub fn signed_out() -> Self {
        Self { loading: false, ..Self::default() }
    }

    /// Rebuild the session from storage. Both the profile and the access
    /// token must be present; anything less is signed out.
    pub fn restore<S: KeyValueStore>(credentials: &CredentialStore<S>) -> Self {
        match (credentials.user(), credentials.access_token()) {
            (Some(user), Some(token)) => Self {
                user: Some(user),
                access_token: Some(token),
                refresh_token: credentials.refresh_token(),
                loading: false,
            },
            _ => Self::signed_out(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    pub fn sign_in(&mut self, response: LoginResponse) {
        self.user = Some(response.user);
        self.access_token = Some(response.access_token);
        self.refresh_token = response.refresh_token;
        self.loading = false;
    }

    pub fn sign_out(&mut self) {
        *self = Self::signed_out();
    }
}

/// Log in against the auth service and mirror the result into storage.
///
/// Storage is written only after the backend accepted the credentials; on
/// failure nothing is persisted and the error is returned untouched.
///
/// # Errors
///
/// Returns any `ApiError` from the login request.
pub async fn authenticate<T, S>(api: &ApiClient<T, S>, credentials: &LoginCredentials) -> Result<LoginResponse, ApiError>
where
    T: Transport,
    S: KeyValueStore,
{
    let response = api::login(api, credentials).await?;
    persist(api.credentials(), &response);
    leptos::logging::log!("signed in as {} ({})", response.user.email, response.user.role);
    Ok(response)
}

/// Write tokens and profile from a login response.
pub fn persist<S: KeyValueStore>(credentials: &CredentialStore<S>, response: &LoginResponse) {
    credentials.set_access_token(&response.access_token);
    match &response.refresh_token {
        Some(token) => credentials.set_refresh_token(token),
        None => credentials.remove_refresh_token(),
    }
    credentials.set_user(&response.user);
}

/// Wipe persisted state for logout. Clears the whole store, including keys
/// other parts of the app wrote.
pub fn end_session<S: KeyValueStore>(credentials: &CredentialStore<S>) {
    credentials.clear();
}
