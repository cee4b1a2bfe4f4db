//! Shared application state for the counterhub server.
//!
//! The store is constructed here, once per `AppState`, and reaches handlers
//! only through `Router::with_state`. Tests build a fresh state per case.

use std::sync::Arc;

use counterhub_core::error::Result;
use counterhub_core::CounterStore;

use crate::config::ServerConfig;
use crate::obs::ServerMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServerConfig,
    store: CounterStore,
    metrics: ServerMetrics,
}

impl AppState {
    /// Build application state with an empty store.
    /// Validates `cfg` so hand-built configs get the same checks as loaded ones.
    pub fn new(cfg: ServerConfig) -> Result<Self> {
        cfg.validate()?;
        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                store: CounterStore::new(),
                metrics: ServerMetrics::default(),
            }),
        })
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn store(&self) -> &CounterStore {
        &self.inner.store
    }

    pub fn metrics(&self) -> &ServerMetrics {
        &self.inner.metrics
    }

    pub fn is_draining(&self) -> bool {
        self.inner.metrics.is_draining()
    }

    pub fn set_draining(&self) {
        self.inner.metrics.set_draining();
    }

    /// Gauge lines appended to `/metrics`.
    pub fn metrics_extra(&self) -> Vec<(&'static str, u64)> {
        vec![("counterhub_counters_live", self.store().len() as u64)]
    }
}
