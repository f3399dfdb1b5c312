//! Photoblog - a photo-blog web application server
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      API Layer (Axum)                        │
//! │  - Readiness checklist endpoint                             │
//! │  - Gallery load-more state endpoints                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Shared State                             │
//! │  - Configuration snapshot (immutable after startup)         │
//! │  - Gallery load-more store (volatile, per-region)           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - `api`: HTTP handlers for config and gallery state
//! - `config`: environment-derived configuration snapshot
//! - `gallery`: per-region load-more state store
//! - `photo`: photo-domain helpers (AI field selection)
//! - `utility`: URL normalization helpers
//! - `error`: Error types

pub mod api;
pub mod config;
pub mod error;
pub mod gallery;
pub mod photo;
pub mod utility;

use std::sync::Arc;

/// Application state shared across all handlers
///
/// Cloned per request; both members are cheap `Arc` handles.
#[derive(Clone)]
pub struct AppState {
    /// Configuration snapshot, derived once at startup
    pub config: Arc<config::SiteConfig>,

    /// Gallery load-more state (volatile, reset on restart)
    pub gallery: Arc<gallery::GalleryStore>,
}

impl AppState {
    /// Build application state around a resolved configuration
    /// snapshot. Gallery regions start zeroed.
    pub fn new(config: config::SiteConfig) -> Self {
        Self {
            config: Arc::new(config),
            gallery: Arc::new(gallery::GalleryStore::new()),
        }
    }
}

/// Build the Axum router with all routes.
///
/// Shared by the binary and integration tests to keep route
/// composition consistent across environments.
pub fn build_router(state: AppState) -> axum::Router {
    use axum::Router;
    use tower_http::{compression::CompressionLayer, trace::TraceLayer};

    let cors_layer = build_cors_layer(&state.config);

    Router::new()
        .route("/health", axum::routing::get(health_check))
        .nest("/api", api::api_router(state))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
}

fn build_cors_layer(config: &config::SiteConfig) -> tower_http::cors::CorsLayer {
    use axum::http::HeaderValue;
    use tower_http::cors::{Any, CorsLayer};

    // Development and preview builds, and production builds without a
    // resolvable public origin, stay permissive.
    let Some(base_url) = config
        .deployment
        .base_url
        .as_deref()
        .filter(|_| config.deployment.is_production())
    else {
        return CorsLayer::permissive();
    };

    if crate::utility::url::url_host(base_url) == "localhost" {
        return CorsLayer::permissive();
    }

    match HeaderValue::from_str(base_url) {
        Ok(origin) => CorsLayer::new()
            .allow_origin([origin])
            .allow_methods(Any)
            .allow_headers(Any),
        Err(error) => {
            tracing::error!(
                %error,
                origin = %base_url,
                "Failed to parse CORS origin from base URL; denying cross-origin requests"
            );
            CorsLayer::new().allow_methods(Any).allow_headers(Any)
        }
    }
}

async fn health_check() -> &'static str {
    "OK"
}
