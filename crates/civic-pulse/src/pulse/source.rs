use super::domain::{EventRecord, GrievanceRecord, RegistrationRecord};

/// Read contract for the systems that own grievance, event, and registration
/// records. Each call returns the complete, current record set.
pub trait CivicRecordSource: Send + Sync {
    fn grievances(&self) -> Result<Vec<GrievanceRecord>, SourceError>;
    fn events(&self) -> Result<Vec<EventRecord>, SourceError>;
    fn registrations(&self) -> Result<Vec<RegistrationRecord>, SourceError>;
}

/// Failure reading from a record source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("{collection} source unavailable: {reason}")]
    Unavailable {
        collection: &'static str,
        reason: String,
    },
}

impl SourceError {
    pub fn unavailable(collection: &'static str, reason: impl Into<String>) -> Self {
        Self::Unavailable {
            collection,
            reason: reason.into(),
        }
    }
}
