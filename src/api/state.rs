//! Shared state behind the reconciliation endpoints.

use std::sync::Arc;

use crate::config::{ConfigLoader, EngineConfig};

/// State shared by every request handler.
///
/// Holds the configuration loaded at startup. Clones are cheap: the
/// loaded thresholds sit behind an [`Arc`], so every handler sees the
/// same schedule and source-priority settings.
#[derive(Clone)]
pub struct AppState {
    loader: Arc<ConfigLoader>,
}

impl AppState {
    /// Wraps a loaded configuration for sharing across handlers.
    pub fn new(loader: ConfigLoader) -> Self {
        Self {
            loader: Arc::new(loader),
        }
    }

    /// Returns the engine configuration requests are reconciled against.
    pub fn engine_config(&self) -> &EngineConfig {
        self.loader.config()
    }
}
