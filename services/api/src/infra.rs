use chrono::{DateTime, Utc};
use civic_pulse::config::RecordsConfig;
use civic_pulse::pulse::import::parse_timestamp;
use civic_pulse::pulse::{
    CivicRecordSource, EventRecord, GrievanceRecord, RecordImportError, RecordImporter,
    RegistrationRecord, SourceError,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Record stores standing in for the grievance and volunteer databases.
#[derive(Default, Clone)]
pub(crate) struct InMemoryCivicRecords {
    grievances: Arc<Mutex<Vec<GrievanceRecord>>>,
    events: Arc<Mutex<Vec<EventRecord>>>,
    registrations: Arc<Mutex<Vec<RegistrationRecord>>>,
}

impl InMemoryCivicRecords {
    pub(crate) fn new(
        grievances: Vec<GrievanceRecord>,
        events: Vec<EventRecord>,
        registrations: Vec<RegistrationRecord>,
    ) -> Self {
        Self {
            grievances: Arc::new(Mutex::new(grievances)),
            events: Arc::new(Mutex::new(events)),
            registrations: Arc::new(Mutex::new(registrations)),
        }
    }

    /// Seeds from the configured data directory. Absent files seed empty sets.
    pub(crate) fn seeded(config: &RecordsConfig) -> Result<Self, RecordImportError> {
        let grievances = match config.grievances_path() {
            Some(path) => {
                load_if_present(&path, |path| RecordImporter::grievances_from_path(path))?
            }
            None => Vec::new(),
        };
        let events = match config.events_path() {
            Some(path) => {
                load_if_present(&path, |path| RecordImporter::events_from_path(path))?
            }
            None => Vec::new(),
        };
        let registrations = match config.registrations_path() {
            Some(path) => {
                load_if_present(&path, |path| RecordImporter::registrations_from_path(path))?
            }
            None => Vec::new(),
        };

        info!(
            grievances = grievances.len(),
            events = events.len(),
            registrations = registrations.len(),
            "civic record stores seeded"
        );

        Ok(Self::new(grievances, events, registrations))
    }

    #[cfg(test)]
    pub(crate) fn push_grievance(&self, record: GrievanceRecord) {
        self.grievances
            .lock()
            .expect("grievance store mutex poisoned")
            .push(record);
    }
}

fn load_if_present<T, F>(path: &Path, load: F) -> Result<Vec<T>, RecordImportError>
where
    F: Fn(&Path) -> Result<Vec<T>, RecordImportError>,
{
    if path.exists() {
        load(path)
    } else {
        Ok(Vec::new())
    }
}

impl CivicRecordSource for InMemoryCivicRecords {
    fn grievances(&self) -> Result<Vec<GrievanceRecord>, SourceError> {
        let guard = self.grievances.lock().expect("grievance store mutex poisoned");
        Ok(guard.clone())
    }

    fn events(&self) -> Result<Vec<EventRecord>, SourceError> {
        let guard = self.events.lock().expect("event store mutex poisoned");
        Ok(guard.clone())
    }

    fn registrations(&self) -> Result<Vec<RegistrationRecord>, SourceError> {
        let guard = self
            .registrations
            .lock()
            .expect("registration store mutex poisoned");
        Ok(guard.clone())
    }
}

pub(crate) fn parse_as_of(raw: &str) -> Result<DateTime<Utc>, String> {
    parse_timestamp(raw).ok_or_else(|| {
        format!("failed to parse '{raw}' as an RFC 3339 timestamp or YYYY-MM-DD date")
    })
}
