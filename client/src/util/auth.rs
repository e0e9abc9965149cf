//! Auth context shared through the component tree.
//!
//! SYSTEM CONTEXT
//! ==============
//! `provide_auth_context` runs once in `App`. It creates the session signal,
//! schedules the storage read for after mount, and exposes `login`/`logout`
//! to pages. Everything else reads the signal through `use_auth`.
//!
//! Only this context writes the auth keys in storage. Pages must treat them as
//! read-only.

use leptos::prelude::*;

use crate::access::LOGIN_PATH;
use crate::config::{PortalConfig, Service};
use crate::net::error::ApiError;
use crate::net::http::{ApiClient, GlooTransport};
use crate::net::types::{LoginCredentials, UserProfile};
use crate::state::session::{self, SessionState};
use crate::util::navigation::hard_redirect;
use crate::util::storage::{BrowserStore, CredentialStore};

/// Handle to the session signal plus the endpoint config.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub session: RwSignal<SessionState>,
    config: StoredValue<PortalConfig>,
}

impl AuthContext {
    pub fn new(config: PortalConfig) -> Self {
        Self { session: RwSignal::new(SessionState::default()), config: StoredValue::new(config) }
    }

    /// Read the persisted session. Runs once after mount.
    pub fn initialize(&self) {
        let restored = SessionState::restore(&CredentialStore::browser());
        if restored.is_authenticated() {
            leptos::logging::log!("session restored from storage");
        }
        self.session.set(restored);
    }

    /// Tracked read of the authentication flag.
    pub fn is_authenticated(&self) -> bool {
        self.session.with(SessionState::is_authenticated)
    }

    /// Tracked read of the current profile.
    pub fn user(&self) -> Option<UserProfile> {
        self.session.with(|s| s.user.clone())
    }

    /// Browser client for `service`. A 401 on any authenticated call ends the
    /// session and sends the browser back to `/login`.
    pub fn client(&self, service: Service) -> ApiClient<GlooTransport, BrowserStore> {
        let base = self.config.with_value(|c| c.base_url(service).to_owned());
        let session = self.session;
        ApiClient::browser(&base).with_unauthorized_hook(move || {
            session.update(SessionState::sign_out);
            hard_redirect(LOGIN_PATH);
        })
    }

    /// Log in and publish the new session.
    ///
    /// # Errors
    ///
    /// Returns the `ApiError` from the auth service unchanged; the session is
    /// left as it was.
    pub async fn login(&self, credentials: LoginCredentials) -> Result<UserProfile, ApiError> {
        let api = self.client(Service::Auth);
        let response = session::authenticate(&api, &credentials).await?;
        let user = response.user.clone();
        self.session.update(|s| s.sign_in(response));
        Ok(user)
    }

    /// Wipe storage, drop the in-memory user, and reload at `/login`.
    pub fn logout(&self) {
        session::end_session(&CredentialStore::browser());
        self.session.update(SessionState::sign_out);
        leptos::logging::log!("signed out");
        hard_redirect(LOGIN_PATH);
    }
}

/// Create the auth context, provide it, and schedule the storage read.
pub fn provide_auth_context(config: PortalConfig) -> AuthContext {
    let auth = AuthContext::new(config);
    provide_context(auth);
    Effect::new(move || auth.initialize());
    auth
}

/// The auth context provided by `App`.
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
