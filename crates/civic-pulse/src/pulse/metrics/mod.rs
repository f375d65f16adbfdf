//! Per-block metric extractors. Each reads only its own record set.

mod complaint;
mod resolution;
mod volunteer;

pub use complaint::{complaint_metrics, ComplaintMetrics};
pub use resolution::{resolution_metrics, ResolutionMetrics};
pub use volunteer::{volunteer_metrics, VolunteerMetrics};

use chrono::{DateTime, Duration, Utc};

pub(crate) const WINDOW_DAYS: i64 = 7;

/// Rounds half-up to two decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}

/// `now - days`, or `None` when that instant predates the representable range.
fn days_before(now: DateTime<Utc>, days: i64) -> Option<DateTime<Utc>> {
    now.checked_sub_signed(Duration::days(days))
}

/// Strictly after `now - 7 days`; later-than-now timestamps count as recent.
/// A window start below the representable range leaves the window open.
pub(crate) fn within_last_window(created_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    let window_start = days_before(now, WINDOW_DAYS);
    created_at.is_some_and(|created| window_start.map_or(true, |start| created > start))
}

/// Strictly between `now - 14 days` and `now - 7 days`. Empty when `now - 7 days`
/// is out of range.
pub(crate) fn within_previous_window(
    created_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> bool {
    let Some(window_end) = days_before(now, WINDOW_DAYS) else {
        return false;
    };
    let window_start = days_before(now, WINDOW_DAYS * 2);
    created_at.is_some_and(|created| {
        created < window_end && window_start.map_or(true, |start| created > start)
    })
}
