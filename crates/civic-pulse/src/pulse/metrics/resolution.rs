use super::{round2, within_last_window};
use crate::pulse::classify::classify_performance;
use crate::pulse::domain::{GrievanceRecord, ResolutionPerformance};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Average reported when nothing has been resolved, so an idle backlog never
/// reads as excellent.
pub const UNRESOLVED_AVERAGE_DAYS: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionMetrics {
    pub average_resolution_days: f64,
    pub complaints_resolved_last_7_days: u64,
    pub performance: ResolutionPerformance,
}

/// Only resolved grievances contribute; other statuses are skipped.
///
/// No resolved-at timestamp exists on the record, so latency is measured from
/// creation to `now`. Resolved records without a creation timestamp add no
/// day counts; if none carry one the average is 0.
pub fn resolution_metrics(grievances: &[GrievanceRecord], now: DateTime<Utc>) -> ResolutionMetrics {
    let resolved: Vec<&GrievanceRecord> = grievances
        .iter()
        .filter(|grievance| grievance.is_resolved())
        .collect();

    let day_counts: Vec<i64> = resolved
        .iter()
        .filter_map(|grievance| grievance.created_at)
        .map(|created| (now - created).num_days().max(0))
        .collect();

    let average_days = if resolved.is_empty() {
        UNRESOLVED_AVERAGE_DAYS
    } else if day_counts.is_empty() {
        0.0
    } else {
        day_counts.iter().sum::<i64>() as f64 / day_counts.len() as f64
    };

    let resolved_last_7_days = resolved
        .iter()
        .filter(|grievance| within_last_window(grievance.created_at, now))
        .count() as u64;

    ResolutionMetrics {
        average_resolution_days: round2(average_days),
        complaints_resolved_last_7_days: resolved_last_7_days,
        performance: classify_performance(resolved.len(), average_days),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pulse::domain::GrievanceStatus;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 9, 30, 0)
            .single()
            .expect("valid timestamp")
    }

    fn resolved_at_age(age: Option<Duration>) -> GrievanceRecord {
        GrievanceRecord::new(GrievanceStatus::Resolved, age.map(|age| now() - age))
    }

    #[test]
    fn empty_resolved_set_uses_pessimistic_default() {
        let pending = vec![GrievanceRecord::new(GrievanceStatus::Pending, Some(now()))];
        let metrics = resolution_metrics(&pending, now());
        assert_eq!(metrics.average_resolution_days, UNRESOLVED_AVERAGE_DAYS);
        assert_eq!(metrics.complaints_resolved_last_7_days, 0);
        assert_eq!(metrics.performance, ResolutionPerformance::NeedsImprovement);
    }

    #[test]
    fn partial_days_are_truncated() {
        let grievances = vec![
            resolved_at_age(Some(Duration::hours(47))),
            resolved_at_age(Some(Duration::hours(12))),
        ];
        let metrics = resolution_metrics(&grievances, now());
        assert_eq!(metrics.average_resolution_days, 0.5);
        assert_eq!(metrics.complaints_resolved_last_7_days, 2);
        assert_eq!(metrics.performance, ResolutionPerformance::Excellent);
    }

    #[test]
    fn average_between_three_and_seven_days_is_good() {
        let grievances = vec![
            resolved_at_age(Some(Duration::days(4))),
            resolved_at_age(Some(Duration::days(5))),
            resolved_at_age(Some(Duration::days(9))),
        ];
        let metrics = resolution_metrics(&grievances, now());
        assert_eq!(metrics.average_resolution_days, 6.0);
        assert_eq!(metrics.complaints_resolved_last_7_days, 2);
        assert_eq!(metrics.performance, ResolutionPerformance::Good);
    }

    #[test]
    fn old_resolutions_need_improvement() {
        let grievances = vec![
            resolved_at_age(Some(Duration::days(20))),
            resolved_at_age(Some(Duration::days(31))),
            resolved_at_age(Some(Duration::days(1))),
        ];
        let metrics = resolution_metrics(&grievances, now());
        assert_eq!(metrics.average_resolution_days, 17.33);
        assert_eq!(metrics.performance, ResolutionPerformance::NeedsImprovement);
    }

    #[test]
    fn untimestamped_records_are_left_out_of_the_average() {
        let grievances = vec![
            resolved_at_age(None),
            resolved_at_age(Some(Duration::days(2))),
        ];
        let metrics = resolution_metrics(&grievances, now());
        assert_eq!(metrics.average_resolution_days, 2.0);
        assert_eq!(metrics.complaints_resolved_last_7_days, 1);
        assert_eq!(metrics.performance, ResolutionPerformance::Excellent);
    }

    #[test]
    fn resolved_without_any_timestamp_averages_zero_days() {
        let grievances = vec![
            resolved_at_age(None),
            resolved_at_age(None),
            resolved_at_age(None),
        ];
        let metrics = resolution_metrics(&grievances, now());
        assert_eq!(metrics.average_resolution_days, 0.0);
        assert_eq!(metrics.complaints_resolved_last_7_days, 0);
        assert_eq!(metrics.performance, ResolutionPerformance::Excellent);
    }

    #[test]
    fn future_timestamps_count_as_zero_days() {
        let grievances = vec![GrievanceRecord::new(
            GrievanceStatus::Resolved,
            Some(now() + Duration::days(3)),
        )];
        let metrics = resolution_metrics(&grievances, now());
        assert_eq!(metrics.average_resolution_days, 0.0);
    }
}
