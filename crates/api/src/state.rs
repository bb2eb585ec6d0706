//! Application state shared across handlers.

use std::sync::Arc;

use securevision_core::SubmissionStore;

use crate::config::ApiConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration and the submission store. The store is held as a trait
/// object so a durable backend can replace the in-memory one without any
/// handler changes.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ApiConfig,
    store: Arc<dyn SubmissionStore>,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: ApiConfig, store: Arc<dyn SubmissionStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, store }),
        }
    }

    /// Get a reference to the API configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    /// Get a reference to the submission store.
    #[must_use]
    pub fn store(&self) -> &dyn SubmissionStore {
        self.inner.store.as_ref()
    }
}
