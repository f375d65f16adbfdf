use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use civic_pulse::pulse::{civic_pulse_router, CivicPulseService, CivicRecordSource};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_pulse_routes<S>(service: Arc<CivicPulseService<S>>) -> axum::Router
where
    S: CivicRecordSource + 'static,
{
    civic_pulse_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::InMemoryCivicRecords;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use chrono::{Duration, TimeZone, Utc};
    use civic_pulse::pulse::{GrievanceRecord, GrievanceStatus};
    use metrics_exporter_prometheus::PrometheusBuilder;
    use serde_json::Value;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tower::ServiceExt;

    fn app_state(ready: bool) -> AppState {
        AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        }
    }

    fn instrumented_router(state: AppState) -> axum::Router {
        with_pulse_routes(service(InMemoryCivicRecords::default())).layer(Extension(state))
    }

    fn service(records: InMemoryCivicRecords) -> Arc<CivicPulseService<InMemoryCivicRecords>> {
        Arc::new(CivicPulseService::new(Arc::new(records)))
    }

    async fn get_json(router: axum::Router, uri: &str) -> (StatusCode, Value) {
        let response = router
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        (status, serde_json::from_slice(&bytes).expect("json body"))
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn admin_pulse_reflects_store_contents() {
        let as_of = Utc
            .with_ymd_and_hms(2025, 8, 1, 0, 0, 0)
            .single()
            .expect("valid timestamp");
        let records = InMemoryCivicRecords::default();
        let router = with_pulse_routes(service(records.clone()));

        let (status, body) = get_json(
            router.clone(),
            "/api/admin/civic-pulse?as_of=2025-08-01T00:00:00Z",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["complaintMetrics"]["totalComplaints"], 0);

        records.push_grievance(GrievanceRecord::new(
            GrievanceStatus::Resolved,
            Some(as_of - Duration::days(2)),
        ));
        records.push_grievance(GrievanceRecord::new(
            GrievanceStatus::Pending,
            Some(as_of - Duration::days(9)),
        ));

        let (status, body) =
            get_json(router, "/api/admin/civic-pulse?as_of=2025-08-01T00:00:00Z").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["complaintMetrics"]["totalComplaints"], 2);
        assert_eq!(body["complaintMetrics"]["resolutionRate"], 50.0);
        assert_eq!(body["complaintMetrics"]["trend"], "STABLE");
        assert_eq!(body["resolutionMetrics"]["averageResolutionDays"], 2.0);
        assert_eq!(body["resolutionMetrics"]["performance"], "EXCELLENT");
        assert_eq!(body["score"], 35 + 40 + 10);
        assert_eq!(body["status"], "HEALTHY");
    }

    #[tokio::test]
    async fn health_route_is_mounted() {
        let router = with_pulse_routes(service(InMemoryCivicRecords::default()));
        let (status, body) = get_json(router, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn ready_route_tracks_the_readiness_flag() {
        let state = app_state(false);
        let (status, body) = get_json(instrumented_router(state.clone()), "/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "initializing");

        state.readiness.store(true, Ordering::Release);
        let (status, body) = get_json(instrumented_router(state), "/ready").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ready");
    }

    #[tokio::test]
    async fn metrics_route_serves_prometheus_text() {
        let response = instrumented_router(app_state(true))
            .oneshot(
                Request::builder()
                    .uri("/metrics")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; version=0.0.4"
        );
    }
}
