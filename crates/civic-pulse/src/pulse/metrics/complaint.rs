use super::{round2, within_last_window, within_previous_window};
use crate::pulse::classify::classify_trend;
use crate::pulse::domain::{GrievanceRecord, GrievanceStatus, Trend};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintMetrics {
    pub total_complaints: u64,
    pub open_complaints: u64,
    pub resolved_complaints: u64,
    /// Percentage of all grievances that are resolved, two decimals.
    pub resolution_rate: f64,
    pub trend: Trend,
}

pub fn complaint_metrics(grievances: &[GrievanceRecord], now: DateTime<Utc>) -> ComplaintMetrics {
    let total = grievances.len() as u64;
    let mut open = 0u64;
    let mut resolved = 0u64;
    let mut recent = 0u64;
    let mut previous = 0u64;

    for grievance in grievances {
        match grievance.status {
            GrievanceStatus::Pending => open += 1,
            GrievanceStatus::Resolved => resolved += 1,
            _ => {}
        }

        if within_last_window(grievance.created_at, now) {
            recent += 1;
        } else if within_previous_window(grievance.created_at, now) {
            previous += 1;
        }
    }

    let resolution_rate = if total > 0 {
        resolved as f64 * 100.0 / total as f64
    } else {
        0.0
    };

    ComplaintMetrics {
        total_complaints: total,
        open_complaints: open,
        resolved_complaints: resolved,
        resolution_rate: round2(resolution_rate),
        trend: classify_trend(recent, previous),
    }
}
