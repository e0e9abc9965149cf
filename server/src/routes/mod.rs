//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The portal's data lives in separate API services that the browser calls
//! directly with a bearer token. This server only renders the Leptos app,
//! serves the compiled WASM/CSS bundle under `/pkg`, and answers `/healthz`.


use std::path::PathBuf;

use axum::Router;
use axum::http::{HeaderValue, StatusCode};
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::ServerError;

/// CORS policy: one exact origin when configured, otherwise any.
pub(crate) fn cors_layer(config: &ServerConfig) -> Result<CorsLayer, ServerError> {
    let origin = match &config.cors_origin {
        Some(origin) => {
            let value = HeaderValue::from_str(origin).map_err(|_| ServerError::CorsOrigin(origin.clone()))?;
            AllowOrigin::exact(value)
        }
        None => AllowOrigin::from(Any),
    };
    Ok(CorsLayer::new().allow_origin(origin).allow_methods(Any).allow_headers(Any))
}

/// Leptos SSR frontend plus static assets and health check.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section) or the CORS origin is
/// not a valid header value.
pub fn app(config: &ServerConfig) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(portal::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || portal::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(cors_layer(config)?)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
