use crate::infra::parse_as_of;
use chrono::{DateTime, Utc};
use civic_pulse::error::AppError;
use civic_pulse::pulse::{compute_snapshot, CivicPulseSnapshot, RecordImporter};
use clap::Args;
use std::fmt::Write;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct PulseReportArgs {
    /// Grievance export (CSV with `status` and `created_at` columns)
    #[arg(long)]
    pub(crate) grievances: PathBuf,
    /// Event export (CSV with a `status` column)
    #[arg(long)]
    pub(crate) events: Option<PathBuf>,
    /// Registration export (CSV with a `status` column)
    #[arg(long)]
    pub(crate) registrations: Option<PathBuf>,
    /// Evaluate as of this instant (RFC 3339 or YYYY-MM-DD, defaults to now)
    #[arg(long, value_parser = parse_as_of)]
    pub(crate) as_of: Option<DateTime<Utc>>,
    /// Print the snapshot as JSON instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_pulse_report(args: PulseReportArgs) -> Result<(), AppError> {
    let PulseReportArgs {
        grievances,
        events,
        registrations,
        as_of,
        json,
    } = args;

    let grievances = RecordImporter::grievances_from_path(&grievances)?;
    let events = match events {
        Some(path) => RecordImporter::events_from_path(path)?,
        None => Vec::new(),
    };
    let registrations = match registrations {
        Some(path) => RecordImporter::registrations_from_path(path)?,
        None => Vec::new(),
    };

    let now = as_of.unwrap_or_else(Utc::now);
    let snapshot = compute_snapshot(&grievances, &events, &registrations, now);

    if json {
        let body = serde_json::to_string_pretty(&snapshot).map_err(std::io::Error::from)?;
        println!("{body}");
    } else {
        print!("{}", render_snapshot(&snapshot));
    }

    Ok(())
}

pub(crate) fn render_snapshot(snapshot: &CivicPulseSnapshot) -> String {
    let complaints = &snapshot.complaint_metrics;
    let resolution = &snapshot.resolution_metrics;
    let volunteers = &snapshot.volunteer_metrics;
    let breakdown = &snapshot.score_breakdown;

    let mut output = String::new();
    let _ = writeln!(
        output,
        "Civic pulse as of {}",
        snapshot.generated_at.format("%Y-%m-%d %H:%M UTC")
    );
    let _ = writeln!(
        output,
        "Status: {} ({}/100)",
        snapshot.status.label(),
        snapshot.score
    );
    let _ = writeln!(output, "{}", snapshot.message);

    let _ = writeln!(output);
    let _ = writeln!(output, "Grievances");
    let _ = writeln!(
        output,
        "- {} total | {} open | {} resolved | {:.2}% resolution rate",
        complaints.total_complaints,
        complaints.open_complaints,
        complaints.resolved_complaints,
        complaints.resolution_rate
    );
    let _ = writeln!(output, "- Weekly trend: {}", complaints.trend.label());

    let _ = writeln!(output);
    let _ = writeln!(output, "Resolution");
    let _ = writeln!(
        output,
        "- {:.2} day average | {} resolved in the last 7 days | {}",
        resolution.average_resolution_days,
        resolution.complaints_resolved_last_7_days,
        resolution.performance.label()
    );

    let _ = writeln!(output);
    let _ = writeln!(output, "Volunteers");
    let _ = writeln!(
        output,
        "- {} events ({} upcoming) | {} active registrations | {} engagement",
        volunteers.total_events,
        volunteers.upcoming_events,
        volunteers.total_volunteers,
        volunteers.engagement.label()
    );

    let _ = writeln!(output);
    let _ = writeln!(
        output,
        "Score breakdown: complaints {:+} | resolution {:+} | volunteers {:+}",
        breakdown.complaint, breakdown.resolution, breakdown.volunteer
    );

    output
}
