//! Authenticated REST client used by every page.
//!
//! Client-side (hydrate): requests go out through `gloo-net`.
//! Server-side (SSR) and tests: `GlooTransport` fails fast, and tests plug in
//! their own `Transport`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bearer token is read from storage on every request, never cached, so a
//! login or logout in another part of the UI is visible to the next call.
//!
//! ERROR HANDLING
//! ==============
//! A 401 to a request that carried a bearer token means the session is dead.
//! The client drops the stored auth keys and fires its unauthorized hook
//! before returning `ApiError::Unauthorized`, so pages never have to detect
//! expiry themselves. Anonymous requests (login) just get `ApiError::Status`.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::rc::Rc;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::ErrorBody;
use crate::util::storage::{BrowserStore, CredentialStore, KeyValueStore};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// Fully resolved outgoing request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// First header value matching `name`, case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a request and returns the raw response.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Browser `fetch` via `gloo-net`.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let mut builder = match request.method {
                HttpMethod::Get => Request::get(&request.url),
                HttpMethod::Post => Request::post(&request.url),
                HttpMethod::Put => Request::put(&request.url),
                HttpMethod::Patch => Request::patch(&request.url),
                HttpMethod::Delete => Request::delete(&request.url),
            };
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let prepared = match request.body {
                Some(body) => builder.body(body),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Transport(e.to_string()))?;

            let resp = prepared.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
            Ok(HttpResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Transport("not available on server".to_owned()))
        }
    }
}

/// Invoked after a bearer-authenticated request comes back 401.
pub type UnauthorizedHook = Rc<dyn Fn()>;

/// JSON REST client bound to one backend base URL.
#[derive(Clone)]
pub struct ApiClient<T, S> {
    base_url: String,
    transport: T,
    credentials: CredentialStore<S>,
    on_unauthorized: Option<UnauthorizedHook>,
}

impl ApiClient<GlooTransport, BrowserStore> {
    /// Client for `base_url` reading credentials from `localStorage`.
    pub fn browser(base_url: &str) -> Self {
        Self::new(base_url, GlooTransport, CredentialStore::browser())
    }
}

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    pub fn new(base_url: &str, transport: T, credentials: CredentialStore<S>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            transport,
            credentials,
            on_unauthorized: None,
        }
    }

    #[must_use]
    pub fn with_unauthorized_hook(mut self, hook: impl Fn() + 'static) -> Self {
        self.on_unauthorized = Some(Rc::new(hook));
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials(&self) -> &CredentialStore<S> {
        &self.credentials
    }

    /// Absolute URL for `path`. Absolute inputs pass through untouched.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_owned();
        }
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.execute(HttpMethod::Get, path, None, true).await
    }

    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.execute(HttpMethod::Post, path, Some(encode_body(body)?), true)
            .await
    }

    pub async fn put<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.execute(HttpMethod::Put, path, Some(encode_body(body)?), true)
            .await
    }

    pub async fn patch<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.execute(HttpMethod::Patch, path, Some(encode_body(body)?), true)
            .await
    }

    pub async fn delete<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.execute(HttpMethod::Delete, path, None, true).await
    }

    /// POST without a bearer token, for endpoints that establish a session.
    pub async fn post_anonymous<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.execute(HttpMethod::Post, path, Some(encode_body(body)?), false)
            .await
    }

    async fn execute<R: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<String>,
        authenticate: bool,
    ) -> Result<R, ApiError> {
        let request = self.build_request(method, path, body, authenticate);
        let bearer = request.header("Authorization").is_some();
        let response = self.transport.send(request).await?;

        if response.is_success() {
            return decode_body(&response.body);
        }

        let err = classify_failure(&response, bearer);
        if matches!(err, ApiError::Unauthorized { .. }) {
            leptos::logging::warn!("session rejected by {}; clearing credentials", self.base_url);
            self.credentials.remove_session();
            if let Some(hook) = &self.on_unauthorized {
                hook();
            }
        }
        Err(err)
    }

    fn build_request(&self, method: HttpMethod, path: &str, body: Option<String>, authenticate: bool) -> HttpRequest {
        let mut headers = vec![("Accept".to_owned(), "application/json".to_owned())];
        if body.is_some() {
            headers.push(("Content-Type".to_owned(), "application/json".to_owned()));
        }
        if authenticate {
            if let Some(token) = self.credentials.access_token() {
                headers.push(("Authorization".to_owned(), bearer_header(&token)));
            }
        }
        HttpRequest { method, url: self.url(path), headers, body }
    }
}

fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

fn encode_body<B: Serialize + ?Sized>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))
}

/// Decode a success body. An empty body decodes as JSON `null`, so `()` and
/// `Option<_>` targets accept `204 No Content`.
fn decode_body<R: DeserializeOwned>(body: &str) -> Result<R, ApiError> {
    let text = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

fn classify_failure(response: &HttpResponse, bearer: bool) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(&response.body)
        .ok()
        .and_then(|b| b.message);
    if response.status == 401 && bearer {
        ApiError::Unauthorized { message }
    } else {
        ApiError::Status { status: response.status, message }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;
    use crate::util::storage::MemoryStore;

    /// Transport that replays queued responses and records every request.
    #[derive(Clone, Default)]
    pub struct ScriptedTransport {
        responses: Rc<RefCell<VecDeque<Result<HttpResponse, ApiError>>>>,
        requests: Rc<RefCell<Vec<HttpRequest>>>,
    }

    impl ScriptedTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn respond(&self, status: u16, body: serde_json::Value) -> &Self {
            self.responses
                .borrow_mut()
                .push_back(Ok(HttpResponse { status, body: body.to_string() }));
            self
        }

        pub fn respond_raw(&self, status: u16, body: &str) -> &Self {
            self.responses
                .borrow_mut()
                .push_back(Ok(HttpResponse { status, body: body.to_owned() }));
            self
        }

        pub fn fail(&self, err: ApiError) -> &Self {
            self.responses.borrow_mut().push_back(Err(err));
            self
        }

        pub fn requests(&self) -> Vec<HttpRequest> {
            self.requests.borrow().clone()
        }

        pub fn last_request(&self) -> Option<HttpRequest> {
            self.requests.borrow().last().cloned()
        }
    }

    #[async_trait(?Send)]
    impl Transport for ScriptedTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            self.requests.borrow_mut().push(request);
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::Transport("no scripted response".to_owned())))
        }
    }

    /// Client against `https://api.test` backed by a fresh memory store.
    pub fn scripted_client() -> (ApiClient<ScriptedTransport, MemoryStore>, ScriptedTransport, MemoryStore) {
        let transport = ScriptedTransport::new();
        let store = MemoryStore::new();
        let client = ApiClient::new("https://api.test/", transport.clone(), CredentialStore::new(store.clone()));
        (client, transport, store)
    }
}
