//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::OrdersConfig;
use crate::db::OrderStore;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The handlers hold no mutable state of
/// their own; everything shared lives behind the store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: OrdersConfig,
    store: Arc<dyn OrderStore>,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: OrdersConfig, store: Arc<dyn OrderStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, store }),
        }
    }

    /// Get a reference to the service configuration.
    #[must_use]
    pub fn config(&self) -> &OrdersConfig {
        &self.inner.config
    }

    /// Get a reference to the order store.
    #[must_use]
    pub fn store(&self) -> &dyn OrderStore {
        self.inner.store.as_ref()
    }
}
