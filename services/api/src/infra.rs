use donor_check::config::AppConfig;
use donor_check::eligibility::EligibilityService;
use donor_check::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn build_service(config: &AppConfig) -> Result<Arc<EligibilityService>, AppError> {
    let service = EligibilityService::new(config.eligibility.clone(), config.resource.clone())?;
    Ok(Arc::new(service))
}
