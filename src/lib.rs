pub mod api;
pub mod config;
pub mod db;
pub mod errors;
pub mod metrics;
pub mod models;
pub mod services;

use crate::config::AppConfig;
use crate::services::StatsReader;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub reader: StatsReader,
    pub metrics_handle: metrics_exporter_prometheus::PrometheusHandle,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        metrics_handle: metrics_exporter_prometheus::PrometheusHandle,
    ) -> Self {
        let reader = StatsReader::new(config.data_dir.clone());
        Self {
            config,
            reader,
            metrics_handle,
        }
    }
}
