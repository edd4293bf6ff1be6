//! Shared application state

use crate::config::ServerConfig;
use crate::store::DashboardStore;
use bullyguard_client::MessageClassifier;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// Application state shared across all requests
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration
    pub config: Arc<ServerConfig>,

    /// Provider-backed classifier
    pub classifier: Arc<dyn MessageClassifier>,

    /// Counters and the last-batch download buffer
    pub store: Arc<DashboardStore>,

    /// Prometheus metrics handle for rendering
    pub metrics_handle: PrometheusHandle,
}

impl AppState {
    pub fn new(
        config: ServerConfig,
        classifier: Arc<dyn MessageClassifier>,
        metrics_handle: PrometheusHandle,
    ) -> Self {
        Self {
            config: Arc::new(config),
            classifier,
            store: Arc::new(DashboardStore::new()),
            metrics_handle,
        }
    }
}
