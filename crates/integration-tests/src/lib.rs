//! Integration tests for the SecureVision submission API.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p securevision-integration-tests
//! ```
//!
//! Each test spawns the full application on an ephemeral port and
//! talks to it over real HTTP, so nothing external needs to be running
//! and tests never share state.
//!
//! # Test Categories
//!
//! - `api_contacts` - Contact submission flow
//! - `api_demo_bookings` - Demo bookings and the slot grid
//! - `api_store_registrations` - Registrations and pricing quotes
//! - `api_service` - Health probes, request ids, CORS, error envelopes

use std::net::SocketAddr;
use std::sync::Arc;

use reqwest::Client;
use securevision_api::config::ApiConfig;
use securevision_api::state::AppState;
use securevision_api::storage::MemoryStore;

/// A running API instance bound to an ephemeral port.
pub struct TestApp {
    pub client: Client,
    base_url: String,
}

impl TestApp {
    /// Spawn the application with a fresh in-memory store.
    ///
    /// The server task is detached; it lives until the test binary
    /// exits, which is fine for test lifetimes.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot bind or the HTTP client cannot be
    /// built; either means the test environment itself is broken.
    pub async fn spawn() -> Self {
        let config = ApiConfig::default();
        let state = AppState::new(config, Arc::new(MemoryStore::new()));
        let app = securevision_api::app(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener
            .local_addr()
            .expect("Failed to read listener address");

        tokio::spawn(async move {
            axum::serve(
                listener,
                app.into_make_service_with_connect_info::<SocketAddr>(),
            )
            .await
            .expect("Test server error");
        });

        let client = Client::builder()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: format!("http://{addr}"),
        }
    }

    /// Absolute URL for a path on this instance.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}
