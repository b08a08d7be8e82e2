use fitness_insights::config::SheetsConfig;
use fitness_insights::error::AppError;
use fitness_insights::workflows::sheets::{ConfiguredFallback, DashboardLoader, SheetClient};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) type ConfiguredLoader = DashboardLoader<SheetClient, ConfiguredFallback>;

pub(crate) fn configured_loader(config: &SheetsConfig) -> Result<ConfiguredLoader, AppError> {
    let client = SheetClient::from_config(config)?;
    let fallback = ConfiguredFallback::from_config(config);
    Ok(DashboardLoader::new(client, fallback))
}
