use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use super::snapshot::{compute_snapshot, CivicPulseSnapshot};
use super::source::{CivicRecordSource, SourceError};

/// Fetches the current record sets and scores them.
pub struct CivicPulseService<S> {
    source: Arc<S>,
}

impl<S> CivicPulseService<S>
where
    S: CivicRecordSource + 'static,
{
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Computes a fresh snapshot as of `now`; nothing is cached between calls.
    pub fn snapshot(&self, now: DateTime<Utc>) -> Result<CivicPulseSnapshot, PulseServiceError> {
        let grievances = self.source.grievances()?;
        let events = self.source.events()?;
        let registrations = self.source.registrations()?;

        let snapshot = compute_snapshot(&grievances, &events, &registrations, now);

        info!(
            score = snapshot.score,
            status = snapshot.status.label(),
            grievances = grievances.len(),
            events = events.len(),
            registrations = registrations.len(),
            "civic pulse computed"
        );
        debug!(
            complaint = snapshot.score_breakdown.complaint,
            resolution = snapshot.score_breakdown.resolution,
            volunteer = snapshot.score_breakdown.volunteer,
            trend = snapshot.complaint_metrics.trend.label(),
            "civic pulse breakdown"
        );

        Ok(snapshot)
    }
}

/// Error raised by the pulse service.
#[derive(Debug, thiserror::Error)]
pub enum PulseServiceError {
    #[error(transparent)]
    Source(#[from] SourceError),
}
