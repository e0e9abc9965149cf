//! Startup failures surfaced by `main`.

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("invalid CORS origin: {0}")]
    CorsOrigin(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
