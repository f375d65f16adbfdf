//! Civic health scoring: grievance, resolution, and volunteer metrics reduced
//! to a single status and 0-100 score.

pub mod classify;
pub mod domain;
pub mod import;
pub mod metrics;
pub mod router;
pub mod score;
pub mod service;
pub mod snapshot;
pub mod source;

pub use domain::{
    Engagement, EventRecord, EventStatus, GrievanceRecord, GrievanceStatus, PulseStatus,
    RegistrationRecord, RegistrationStatus, ResolutionPerformance, Trend,
};
pub use import::{RecordImportError, RecordImporter};
pub use metrics::{ComplaintMetrics, ResolutionMetrics, VolunteerMetrics};
pub use router::civic_pulse_router;
pub use score::{compose_score, PulseScore, ScoreBreakdown};
pub use service::{CivicPulseService, PulseServiceError};
pub use snapshot::{compute_snapshot, CivicPulseSnapshot};
pub use source::{CivicRecordSource, SourceError};
