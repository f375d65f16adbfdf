use crate::pulse::classify::classify_engagement;
use crate::pulse::domain::{
    Engagement, EventRecord, EventStatus, RegistrationRecord, RegistrationStatus,
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerMetrics {
    pub total_events: u64,
    pub upcoming_events: u64,
    /// Registrations still in the REGISTERED state. Attended and cancelled
    /// registrations are not counted.
    pub total_volunteers: u64,
    pub engagement: Engagement,
}

pub fn volunteer_metrics(
    events: &[EventRecord],
    registrations: &[RegistrationRecord],
) -> VolunteerMetrics {
    let total_events = events.len() as u64;
    let upcoming_events = events
        .iter()
        .filter(|event| event.status == EventStatus::Upcoming)
        .count() as u64;
    let total_volunteers = registrations
        .iter()
        .filter(|registration| registration.status == RegistrationStatus::Registered)
        .count() as u64;

    VolunteerMetrics {
        total_events,
        upcoming_events,
        total_volunteers,
        engagement: classify_engagement(total_events, total_volunteers),
    }
}
