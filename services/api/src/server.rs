use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryCivicRecords};
use crate::routes::with_pulse_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use civic_pulse::config::AppConfig;
use civic_pulse::error::AppError;
use civic_pulse::pulse::CivicPulseService;
use civic_pulse::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let records = Arc::new(InMemoryCivicRecords::seeded(&config.records)?);
    let pulse_service = Arc::new(CivicPulseService::new(records));

    let app = with_pulse_routes(pulse_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "civic pulse service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
