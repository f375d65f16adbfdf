//! CSV exports from the grievance and volunteer systems.
//!
//! Status columns go through the same normalizing parse as the JSON API, so
//! "Resolved", "resolved" and "RESOLVED" all land in the same bucket.

use super::domain::{
    EventRecord, EventStatus, GrievanceRecord, GrievanceStatus, RegistrationRecord,
    RegistrationStatus,
};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum RecordImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for RecordImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordImportError::Io(err) => write!(f, "failed to read record export: {}", err),
            RecordImportError::Csv(err) => write!(f, "invalid record CSV data: {}", err),
        }
    }
}

impl std::error::Error for RecordImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RecordImportError::Io(err) => Some(err),
            RecordImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for RecordImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for RecordImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

#[derive(Debug, Deserialize)]
struct GrievanceRow {
    #[serde(alias = "Status", alias = "STATUS")]
    status: String,
    #[serde(
        alias = "createdAt",
        alias = "Created At",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    created_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StatusRow {
    #[serde(alias = "Status", alias = "STATUS")]
    status: String,
}

pub struct RecordImporter;

impl RecordImporter {
    pub fn grievances_from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<GrievanceRecord>, RecordImportError> {
        let file = std::fs::File::open(path)?;
        Self::grievances_from_reader(file)
    }

    pub fn grievances_from_reader<R: Read>(
        reader: R,
    ) -> Result<Vec<GrievanceRecord>, RecordImportError> {
        let mut csv_reader = csv_reader(reader);
        let mut records = Vec::new();

        for row in csv_reader.deserialize::<GrievanceRow>() {
            let row = row?;
            records.push(GrievanceRecord::new(
                GrievanceStatus::parse(&row.status),
                row.created_at.as_deref().and_then(parse_timestamp),
            ));
        }

        Ok(records)
    }

    pub fn events_from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<EventRecord>, RecordImportError> {
        let file = std::fs::File::open(path)?;
        Self::events_from_reader(file)
    }

    pub fn events_from_reader<R: Read>(reader: R) -> Result<Vec<EventRecord>, RecordImportError> {
        read_statuses(reader, |status| EventRecord {
            status: EventStatus::parse(status),
        })
    }

    pub fn registrations_from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<RegistrationRecord>, RecordImportError> {
        let file = std::fs::File::open(path)?;
        Self::registrations_from_reader(file)
    }

    pub fn registrations_from_reader<R: Read>(
        reader: R,
    ) -> Result<Vec<RegistrationRecord>, RecordImportError> {
        read_statuses(reader, |status| RegistrationRecord {
            status: RegistrationStatus::parse(status),
        })
    }
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader)
}

fn read_statuses<R, T, F>(reader: R, build: F) -> Result<Vec<T>, RecordImportError>
where
    R: Read,
    F: Fn(&str) -> T,
{
    let mut csv_reader = csv_reader(reader);
    let mut records = Vec::new();

    for row in csv_reader.deserialize::<StatusRow>() {
        let row = row?;
        records.push(build(&row.status));
    }

    Ok(records)
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

/// Accepts RFC 3339, naive date-times (read as UTC) and bare dates (midnight
/// UTC). Anything else is treated as a missing timestamp.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_supported_timestamp_shapes() {
        let expected = Utc
            .with_ymd_and_hms(2025, 2, 3, 4, 5, 6)
            .single()
            .expect("valid timestamp");
        assert_eq!(parse_timestamp("2025-02-03T04:05:06Z"), Some(expected));
        assert_eq!(parse_timestamp("2025-02-03T05:05:06+01:00"), Some(expected));
        assert_eq!(parse_timestamp("2025-02-03T04:05:06"), Some(expected));
        assert_eq!(parse_timestamp("2025-02-03 04:05:06"), Some(expected));
        assert_eq!(
            parse_timestamp("2025-02-03T04:05:06.250").map(|dt| dt.timestamp()),
            Some(expected.timestamp())
        );
        assert_eq!(
            parse_timestamp("2025-02-03"),
            Utc.with_ymd_and_hms(2025, 2, 3, 0, 0, 0).single()
        );
    }

    #[test]
    fn unparseable_timestamps_are_missing() {
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("last tuesday"), None);
        assert_eq!(parse_timestamp("03/02/2025"), None);
    }
}
