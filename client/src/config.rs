//! Backend endpoint configuration resolved at build time.
//!
//! The portal talks to several REST services. Each base URL can be set with
//! its own variable; unset services fall back to `PORTAL_API_URL`, and then to
//! the page origin (empty base, relative paths).
//!
//! - `PORTAL_API_URL`
//! - `PORTAL_AUTH_API_URL`
//! - `PORTAL_LEARNING_API_URL`
//! - `PORTAL_AI_API_URL`
//! - `PORTAL_QUEST_API_URL`
//! - `PORTAL_ASSESSMENT_API_URL`
//! - `PORTAL_LISTENING_API_URL`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const SHARED_API_URL_KEY: &str = "PORTAL_API_URL";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be an http(s) URL or an absolute path, got '{value}'")]
    InvalidUrl { key: &'static str, value: String },
}

/// Remote REST services the portal consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Auth,
    Learning,
    Ai,
    Quest,
    Assessment,
    Listening,
}

impl Service {
    pub const ALL: [Self; 6] = [Self::Auth, Self::Learning, Self::Ai, Self::Quest, Self::Assessment, Self::Listening];

    pub fn env_key(self) -> &'static str {
        match self {
            Self::Auth => "PORTAL_AUTH_API_URL",
            Self::Learning => "PORTAL_LEARNING_API_URL",
            Self::Ai => "PORTAL_AI_API_URL",
            Self::Quest => "PORTAL_QUEST_API_URL",
            Self::Assessment => "PORTAL_ASSESSMENT_API_URL",
            Self::Listening => "PORTAL_LISTENING_API_URL",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PortalConfig {
    pub auth_url: String,
    pub learning_url: String,
    pub ai_url: String,
    pub quest_url: String,
    pub assessment_url: String,
    pub listening_url: String,
}

impl PortalConfig {
    /// Config baked in from the build environment. Invalid values are logged
    /// and replaced with same-origin defaults.
    pub fn from_build_env() -> Self {
        Self::from_lookup(build_env).unwrap_or_else(|e| {
            leptos::logging::warn!("portal config rejected: {e}; using same-origin endpoints");
            Self::default()
        })
    }

    /// Resolve every service URL through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let shared = read_url(&lookup, SHARED_API_URL_KEY)?.unwrap_or_default();
        let resolve = |service: Service| -> Result<String, ConfigError> {
            Ok(read_url(&lookup, service.env_key())?.unwrap_or_else(|| shared.clone()))
        };
        Ok(Self {
            auth_url: resolve(Service::Auth)?,
            learning_url: resolve(Service::Learning)?,
            ai_url: resolve(Service::Ai)?,
            quest_url: resolve(Service::Quest)?,
            assessment_url: resolve(Service::Assessment)?,
            listening_url: resolve(Service::Listening)?,
        })
    }

    pub fn base_url(&self, service: Service) -> &str {
        match service {
            Service::Auth => &self.auth_url,
            Service::Learning => &self.learning_url,
            Service::Ai => &self.ai_url,
            Service::Quest => &self.quest_url,
            Service::Assessment => &self.assessment_url,
            Service::Listening => &self.listening_url,
        }
    }
}

fn read_url(lookup: &impl Fn(&str) -> Option<String>, key: &'static str) -> Result<Option<String>, ConfigError> {
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    let value = raw.trim().trim_end_matches('/');
    if value.is_empty() {
        return Ok(None);
    }
    if value.starts_with("http://") || value.starts_with("https://") || value.starts_with('/') {
        Ok(Some(value.to_owned()))
    } else {
        Err(ConfigError::InvalidUrl { key, value: raw })
    }
}

fn build_env(key: &str) -> Option<String> {
    let value = match key {
        SHARED_API_URL_KEY => option_env!("PORTAL_API_URL"),
        "PORTAL_AUTH_API_URL" => option_env!("PORTAL_AUTH_API_URL"),
        "PORTAL_LEARNING_API_URL" => option_env!("PORTAL_LEARNING_API_URL"),
        "PORTAL_AI_API_URL" => option_env!("PORTAL_AI_API_URL"),
        "PORTAL_QUEST_API_URL" => option_env!("PORTAL_QUEST_API_URL"),
        "PORTAL_ASSESSMENT_API_URL" => option_env!("PORTAL_ASSESSMENT_API_URL"),
        "PORTAL_LISTENING_API_URL" => option_env!("PORTAL_LISTENING_API_URL"),
        _ => None,
    };
    value.map(str::to_owned)
}
