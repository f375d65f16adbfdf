use super::domain::{Engagement, PulseStatus, ResolutionPerformance, Trend};

pub(crate) const TREND_RISE_FACTOR: f64 = 1.2;
pub(crate) const TREND_FALL_FACTOR: f64 = 0.8;

/// Compares the last seven days against the seven before them.
///
/// The thresholds are multiplicative, so an empty previous window with any
/// recent activity reads as increasing.
pub fn classify_trend(recent: u64, previous: u64) -> Trend {
    let recent = recent as f64;
    let previous = previous as f64;

    if recent > previous * TREND_RISE_FACTOR {
        Trend::Increasing
    } else if recent < previous * TREND_FALL_FACTOR {
        Trend::Decreasing
    } else {
        Trend::Stable
    }
}

/// `average_days` is ignored when nothing has been resolved.
pub fn classify_performance(resolved: usize, average_days: f64) -> ResolutionPerformance {
    if resolved == 0 {
        return ResolutionPerformance::NeedsImprovement;
    }

    if average_days < 3.0 {
        ResolutionPerformance::Excellent
    } else if average_days < 7.0 {
        ResolutionPerformance::Good
    } else {
        ResolutionPerformance::NeedsImprovement
    }
}

pub fn classify_engagement(total_events: u64, total_volunteers: u64) -> Engagement {
    if total_events == 0 {
        return Engagement::Low;
    }

    let volunteers_per_event = total_volunteers as f64 / total_events as f64;
    if volunteers_per_event >= 20.0 {
        Engagement::High
    } else if volunteers_per_event >= 10.0 {
        Engagement::Medium
    } else {
        Engagement::Low
    }
}

pub fn classify_status(score: u8) -> PulseStatus {
    match score {
        70.. => PulseStatus::Healthy,
        40..=69 => PulseStatus::Warning,
        _ => PulseStatus::Critical,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_uses_twenty_percent_band() {
        assert_eq!(classify_trend(12, 10), Trend::Stable);
        assert_eq!(classify_trend(13, 10), Trend::Increasing);
        assert_eq!(classify_trend(8, 10), Trend::Stable);
        assert_eq!(classify_trend(7, 10), Trend::Decreasing);
    }

    #[test]
    fn trend_with_empty_previous_window() {
        assert_eq!(classify_trend(0, 0), Trend::Stable);
        assert_eq!(classify_trend(1, 0), Trend::Increasing);
        assert_eq!(classify_trend(0, 1), Trend::Decreasing);
    }

    #[test]
    fn performance_tiers() {
        assert_eq!(classify_performance(4, 2.99), ResolutionPerformance::Excellent);
        assert_eq!(classify_performance(4, 3.0), ResolutionPerformance::Good);
        assert_eq!(classify_performance(4, 6.99), ResolutionPerformance::Good);
        assert_eq!(
            classify_performance(4, 7.0),
            ResolutionPerformance::NeedsImprovement
        );
        assert_eq!(
            classify_performance(0, 0.0),
            ResolutionPerformance::NeedsImprovement
        );
    }

    #[test]
    fn engagement_tiers() {
        assert_eq!(classify_engagement(0, 50), Engagement::Low);
        assert_eq!(classify_engagement(2, 40), Engagement::High);
        assert_eq!(classify_engagement(2, 39), Engagement::Medium);
        assert_eq!(classify_engagement(3, 30), Engagement::Medium);
        assert_eq!(classify_engagement(3, 29), Engagement::Low);
    }

    #[test]
    fn status_boundaries() {
        assert_eq!(classify_status(100), PulseStatus::Healthy);
        assert_eq!(classify_status(70), PulseStatus::Healthy);
        assert_eq!(classify_status(69), PulseStatus::Warning);
        assert_eq!(classify_status(40), PulseStatus::Warning);
        assert_eq!(classify_status(39), PulseStatus::Critical);
        assert_eq!(classify_status(0), PulseStatus::Critical);
    }
}
