use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Uppercases and collapses separators so "in progress", "In-Progress" and
/// "IN_PROGRESS" normalize to the same token.
fn normalize_token(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            other => other.to_ascii_uppercase(),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", from = "String")]
pub enum GrievanceStatus {
    Pending,
    InProgress,
    Resolved,
    Rejected,
    /// Anything outside the known lifecycle; counted in no bucket.
    Other,
}

impl GrievanceStatus {
    pub fn parse(raw: &str) -> Self {
        match normalize_token(raw).as_str() {
            "PENDING" => Self::Pending,
            "IN_PROGRESS" => Self::InProgress,
            "RESOLVED" => Self::Resolved,
            "REJECTED" => Self::Rejected,
            _ => Self::Other,
        }
    }
}

impl From<String> for GrievanceStatus {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", from = "String")]
pub enum EventStatus {
    Upcoming,
    Ongoing,
    Completed,
    Cancelled,
    Other,
}

impl EventStatus {
    pub fn parse(raw: &str) -> Self {
        match normalize_token(raw).as_str() {
            "UPCOMING" => Self::Upcoming,
            "ONGOING" => Self::Ongoing,
            "COMPLETED" => Self::Completed,
            "CANCELLED" | "CANCELED" => Self::Cancelled,
            _ => Self::Other,
        }
    }
}

impl From<String> for EventStatus {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", from = "String")]
pub enum RegistrationStatus {
    Registered,
    Attended,
    Cancelled,
    Other,
}

impl RegistrationStatus {
    pub fn parse(raw: &str) -> Self {
        match normalize_token(raw).as_str() {
            "REGISTERED" => Self::Registered,
            "ATTENDED" => Self::Attended,
            "CANCELLED" | "CANCELED" => Self::Cancelled,
            _ => Self::Other,
        }
    }
}

impl From<String> for RegistrationStatus {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

/// Read view of a stored grievance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrievanceRecord {
    pub status: GrievanceStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl GrievanceRecord {
    pub fn new(status: GrievanceStatus, created_at: Option<DateTime<Utc>>) -> Self {
        Self { status, created_at }
    }

    pub fn is_resolved(&self) -> bool {
        self.status == GrievanceStatus::Resolved
    }
}

/// Read view of a volunteer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub status: EventStatus,
}

/// Read view of a volunteer's event registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRecord {
    pub status: RegistrationStatus,
}

/// Week-over-week direction of incoming grievance volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Trend {
    Increasing,
    Stable,
    Decreasing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResolutionPerformance {
    NeedsImprovement,
    Good,
    Excellent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Engagement {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PulseStatus {
    Healthy,
    Warning,
    Critical,
}

impl PulseStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Healthy => "HEALTHY",
            Self::Warning => "WARNING",
            Self::Critical => "CRITICAL",
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            Self::Healthy => "City operations are running smoothly. Keep up the good work!",
            Self::Warning => {
                "Some areas need attention. Monitor grievance resolution and volunteer engagement."
            }
            Self::Critical => {
                "Immediate action required! High grievance volume and low resolution rate detected."
            }
        }
    }
}

impl Trend {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Increasing => "INCREASING",
            Self::Stable => "STABLE",
            Self::Decreasing => "DECREASING",
        }
    }
}

impl ResolutionPerformance {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "EXCELLENT",
            Self::Good => "GOOD",
            Self::NeedsImprovement => "NEEDS_IMPROVEMENT",
        }
    }
}

impl Engagement {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }
}
