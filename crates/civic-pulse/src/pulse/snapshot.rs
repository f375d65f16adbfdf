use super::domain::{EventRecord, GrievanceRecord, PulseStatus, RegistrationRecord};
use super::metrics::{
    complaint_metrics, resolution_metrics, volunteer_metrics, ComplaintMetrics, ResolutionMetrics,
    VolunteerMetrics,
};
use super::score::{compose_score, ScoreBreakdown};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Civic health at one instant. Recomputed on every request, never cached.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CivicPulseSnapshot {
    pub status: PulseStatus,
    pub score: u8,
    pub message: &'static str,
    pub complaint_metrics: ComplaintMetrics,
    pub resolution_metrics: ResolutionMetrics,
    pub volunteer_metrics: VolunteerMetrics,
    pub score_breakdown: ScoreBreakdown,
    pub generated_at: DateTime<Utc>,
}

/// Reduces materialized record sets to a snapshot as of `now`.
///
/// Never fails: empty sets produce well-formed blocks with their fallback
/// values and unrecognized statuses are simply not counted.
pub fn compute_snapshot(
    grievances: &[GrievanceRecord],
    events: &[EventRecord],
    registrations: &[RegistrationRecord],
    now: DateTime<Utc>,
) -> CivicPulseSnapshot {
    let complaint_metrics = complaint_metrics(grievances, now);
    let resolution_metrics = resolution_metrics(grievances, now);
    let volunteer_metrics = volunteer_metrics(events, registrations);

    let pulse = compose_score(&complaint_metrics, &resolution_metrics, &volunteer_metrics);

    CivicPulseSnapshot {
        status: pulse.status,
        score: pulse.score,
        message: pulse.message(),
        complaint_metrics,
        resolution_metrics,
        volunteer_metrics,
        score_breakdown: pulse.breakdown,
        generated_at: now,
    }
}
