use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::warn;

use super::domain::{EventRecord, GrievanceRecord, RegistrationRecord};
use super::import::parse_timestamp;
use super::service::CivicPulseService;
use super::snapshot::{compute_snapshot, CivicPulseSnapshot};
use super::source::CivicRecordSource;
use crate::error::AppError;

pub const CIVIC_PULSE_PATH: &str = "/api/admin/civic-pulse";
pub const COMPUTE_PATH: &str = "/api/v1/civic-pulse/compute";

/// Router exposing the admin snapshot and a stateless compute endpoint.
pub fn civic_pulse_router<S>(service: Arc<CivicPulseService<S>>) -> Router
where
    S: CivicRecordSource + 'static,
{
    Router::new()
        .route(CIVIC_PULSE_PATH, get(snapshot_handler::<S>))
        .route(COMPUTE_PATH, post(compute_handler))
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub struct SnapshotQuery {
    #[serde(default)]
    pub as_of: Option<String>,
}

/// Record sets supplied inline; `now` defaults to the current time.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputeRequest {
    #[serde(default)]
    pub grievances: Vec<GrievanceRecord>,
    #[serde(default)]
    pub events: Vec<EventRecord>,
    #[serde(default)]
    pub registrations: Vec<RegistrationRecord>,
    #[serde(default)]
    pub now: Option<DateTime<Utc>>,
}

pub(crate) async fn snapshot_handler<S>(
    State(service): State<Arc<CivicPulseService<S>>>,
    Query(query): Query<SnapshotQuery>,
) -> Result<Json<CivicPulseSnapshot>, AppError>
where
    S: CivicRecordSource + 'static,
{
    let now = match query.as_of.as_deref() {
        None => Utc::now(),
        Some(raw) => parse_timestamp(raw).ok_or_else(|| {
            AppError::InvalidInput(format!("as_of '{raw}' is not a recognized timestamp"))
        })?,
    };

    let snapshot = service.snapshot(now).map_err(|error| {
        warn!(%error, "civic pulse unavailable");
        AppError::from(error)
    })?;
    Ok(Json(snapshot))
}

pub(crate) async fn compute_handler(
    Json(request): Json<ComputeRequest>,
) -> Json<CivicPulseSnapshot> {
    let ComputeRequest {
        grievances,
        events,
        registrations,
        now,
    } = request;

    Json(compute_snapshot(
        &grievances,
        &events,
        &registrations,
        now.unwrap_or_else(Utc::now),
    ))
}
