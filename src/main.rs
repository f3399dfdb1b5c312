//! Photoblog binary entry point

use photoblog::config::{EnvSnapshot, SiteConfig};
use photoblog::error::AppError;
use photoblog::{AppState, build_router};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Application entry point
///
/// # Setup
/// 1. Initialize tracing/logging
/// 2. Capture the environment snapshot and derive configuration
/// 3. Initialize AppState
/// 4. Build Axum router
/// 5. Start HTTP server
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize tracing/logging
    let log_format = std::env::var("PHOTOBLOG_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    if log_format == "json" {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "photoblog=info,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "photoblog=info,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }

    tracing::info!("Starting Photoblog...");

    // 2. Capture the environment exactly once and derive configuration
    let env = EnvSnapshot::from_process();
    let config = SiteConfig::load(&env);
    tracing::info!(
        title = %config.identity.title,
        environment = ?config.deployment.environment,
        storage = config.storage.current_storage.as_str(),
        "Configuration loaded"
    );

    if !config.is_site_ready() {
        tracing::warn!(
            has_database = config.storage.has_database,
            has_storage_provider = config.storage.has_storage_provider,
            has_auth_secret = config.auth.has_auth_secret,
            has_admin_user = config.auth.has_admin_user,
            "Site is not fully configured; see /api/config for the checklist"
        );
    }

    if let Some(base_url) = &config.deployment.base_url {
        tracing::info!("Public URL: {}", base_url);
    }

    // 3. Initialize application state
    let state = AppState::new(config);

    // 4. Build Axum router
    let app = build_router(state);

    // 5. Start HTTP server
    let host = env.string_or("HOST", "127.0.0.1");
    let port: u16 = match env.get("PORT") {
        Some(raw) => raw
            .parse()
            .map_err(|_| AppError::Config(format!("PORT must be a number, got {raw:?}")))?,
        None => 3000,
    };
    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
