//! Shared application state for the cubic-root server.
//!
//! Cloned into every handler by axum; all fields sit behind `Arc` so a clone
//! is a couple of refcount bumps.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::config::ServerConfig;
use crate::obs::metrics::ServiceMetrics;

#[derive(Clone, Debug)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    metrics: Arc<ServiceMetrics>,
}

#[derive(Debug)]
struct AppStateInner {
    cfg: ServerConfig,
    draining: AtomicBool,
}

impl AppState {
    /// Build state with a fresh metrics registry.
    pub fn new(cfg: ServerConfig) -> Self {
        Self::with_metrics(cfg, Arc::new(ServiceMetrics::new()))
    }

    /// Build state around an existing registry (tests keep a handle to it).
    pub fn with_metrics(cfg: ServerConfig, metrics: Arc<ServiceMetrics>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                draining: AtomicBool::new(false),
            }),
            metrics,
        }
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn metrics(&self) -> &ServiceMetrics {
        &self.metrics
    }

    /// Mark draining state (readiness starts failing).
    pub fn set_draining(&self) {
        self.inner.draining.store(true, Ordering::Relaxed);
    }

    pub fn is_draining(&self) -> bool {
        self.inner.draining.load(Ordering::Relaxed)
    }
}
