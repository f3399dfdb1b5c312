//! Common test utilities for E2E tests

use photoblog::config::{EnvSnapshot, SiteConfig};
use photoblog::{AppState, build_router};
use tokio::net::TcpListener;

/// Test server instance
pub struct TestServer {
    pub addr: String,
    pub state: AppState,
    pub client: reqwest::Client,
}

impl TestServer {
    /// Create a test server with an empty environment snapshot.
    pub async fn new() -> Self {
        Self::with_env(&[]).await
    }

    /// Create a test server with an explicit environment snapshot.
    pub async fn with_env(pairs: &[(&str, &str)]) -> Self {
        let env: EnvSnapshot = pairs.iter().copied().collect();
        let config = SiteConfig::load(&env);
        let state = AppState::new(config);

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap();

        // Bind to random port
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let addr_str = format!("http://{}", addr);

        let app = build_router(state.clone());

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr: addr_str,
            state,
            client,
        }
    }

    /// Get base URL for API requests
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.addr, path)
    }
}
