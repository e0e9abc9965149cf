//! Typed wrappers for the backend endpoints the portal calls.
//!
//! Each helper is a thin `ApiClient` call so pages never spell raw paths.
//! Which backend a helper should be pointed at is the caller's choice; see
//! `config::Service`.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::http::{ApiClient, Transport};
use super::types::{LearningPackage, LoginCredentials, LoginResponse, UserProfile};
use crate::util::storage::KeyValueStore;

pub const LOGIN_ENDPOINT: &str = "/api/auth/login";
pub const USERS_ENDPOINT: &str = "/api/users";
pub const MENTOR_LEARNERS_ENDPOINT: &str = "/api/mentor/learners";
pub const LEARNING_PACKAGES_ENDPOINT: &str = "/api/learning-packages";

/// Exchange credentials for tokens via `POST /api/auth/login` (auth service).
///
/// # Errors
///
/// Returns the client error unchanged; a rejected login is
/// `ApiError::Status` with the server's message when it sent one.
pub async fn login<T, S>(api: &ApiClient<T, S>, credentials: &LoginCredentials) -> Result<LoginResponse, ApiError>
where
    T: Transport,
    S: KeyValueStore,
{
    api.post_anonymous(LOGIN_ENDPOINT, credentials).await
}

/// All portal users, for the admin directory (auth service).
///
/// # Errors
///
/// Propagates any `ApiError` from the request.
pub async fn list_users<T: Transport, S: KeyValueStore>(api: &ApiClient<T, S>) -> Result<Vec<UserProfile>, ApiError> {
    api.get(USERS_ENDPOINT).await
}

/// Learners assigned to the signed-in mentor (assessment service).
///
/// # Errors
///
/// Propagates any `ApiError` from the request.
pub async fn list_mentor_learners<T: Transport, S: KeyValueStore>(
    api: &ApiClient<T, S>,
) -> Result<Vec<UserProfile>, ApiError> {
    api.get(MENTOR_LEARNERS_ENDPOINT).await
}

/// Learning packages available to the signed-in learner (learning service).
///
/// # Errors
///
/// Propagates any `ApiError` from the request.
pub async fn list_learning_packages<T: Transport, S: KeyValueStore>(
    api: &ApiClient<T, S>,
) -> Result<Vec<LearningPackage>, ApiError> {
    api.get(LEARNING_PACKAGES_ENDPOINT).await
}
