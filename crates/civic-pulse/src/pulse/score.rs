use super::classify::classify_status;
use super::domain::{Engagement, PulseStatus, ResolutionPerformance, Trend};
use super::metrics::{ComplaintMetrics, ResolutionMetrics, VolunteerMetrics};
use serde::Serialize;

const RATE_WEIGHT: f64 = 0.7;
const TREND_ADJUSTMENT: i32 = 10;

/// Points contributed by each block before clamping.
///
/// `complaint` may be negative or exceed 70; only the final total is clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub complaint: i32,
    pub resolution: i32,
    pub volunteer: i32,
}

impl ScoreBreakdown {
    pub fn raw_total(&self) -> i32 {
        self.complaint + self.resolution + self.volunteer
    }

    pub fn score(&self) -> u8 {
        self.raw_total().clamp(0, 100) as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseScore {
    pub score: u8,
    pub status: PulseStatus,
    pub breakdown: ScoreBreakdown,
}

impl PulseScore {
    pub fn message(&self) -> &'static str {
        self.status.message()
    }
}

pub fn complaint_points(metrics: &ComplaintMetrics) -> i32 {
    let base = (metrics.resolution_rate * RATE_WEIGHT).floor() as i32;
    match metrics.trend {
        Trend::Decreasing => base + TREND_ADJUSTMENT,
        Trend::Increasing => base - TREND_ADJUSTMENT,
        Trend::Stable => base,
    }
}

pub const fn resolution_points(performance: ResolutionPerformance) -> i32 {
    match performance {
        ResolutionPerformance::Excellent => 40,
        ResolutionPerformance::Good => 25,
        ResolutionPerformance::NeedsImprovement => 10,
    }
}

pub const fn volunteer_points(engagement: Engagement) -> i32 {
    match engagement {
        Engagement::High => 30,
        Engagement::Medium => 20,
        Engagement::Low => 10,
    }
}

/// Additive point system; the blocks are not normalized against each other.
pub fn compose_score(
    complaints: &ComplaintMetrics,
    resolution: &ResolutionMetrics,
    volunteers: &VolunteerMetrics,
) -> PulseScore {
    let breakdown = ScoreBreakdown {
        complaint: complaint_points(complaints),
        resolution: resolution_points(resolution.performance),
        volunteer: volunteer_points(volunteers.engagement),
    };
    let score = breakdown.score();

    PulseScore {
        score,
        status: classify_status(score),
        breakdown,
    }
}
