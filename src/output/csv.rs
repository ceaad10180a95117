//! CSV writers for the three generated tables

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use tracing::info;

use crate::events::EventRecord;
use crate::pipeline::GenerationResult;
use crate::sessions::SessionRecord;
use crate::users::UserRecord;

/// Timestamp format used in the output files
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Date format used in the output files
pub const DATE_FORMAT: &str = "%Y-%m-%d";

fn open_writer(path: &Path) -> GenerationResult<csv::Writer<BufWriter<File>>> {
    let file = File::create(path)?;
    Ok(csv::WriterBuilder::new().from_writer(BufWriter::new(file)))
}

/// Write the user table to `path`, returning the number of data rows
pub fn write_users_csv(path: &Path, users: &[UserRecord]) -> GenerationResult<usize> {
    let mut writer = open_writer(path)?;

    writer.write_record(["id", "signup_date", "country", "plan", "active"])?;
    for user in users {
        writer.write_record([
            user.id.to_string(),
            user.signup_date.format(DATE_FORMAT).to_string(),
            user.country.clone(),
            user.plan.to_string(),
            user.active.to_string(),
        ])?;
    }
    writer.flush()?;

    info!("Wrote {} user rows to {}", users.len(), path.display());
    Ok(users.len())
}

/// Write the session table to `path`, returning the number of data rows
pub fn write_sessions_csv(path: &Path, sessions: &[SessionRecord]) -> GenerationResult<usize> {
    let mut writer = open_writer(path)?;

    writer.write_record([
        "id",
        "user_id",
        "start_time",
        "end_time",
        "page_view_count",
        "device",
    ])?;
    for session in sessions {
        writer.write_record([
            session.id.to_string(),
            session.user_id.to_string(),
            session.start_time.format(TIMESTAMP_FORMAT).to_string(),
            session.end_time.format(TIMESTAMP_FORMAT).to_string(),
            session.page_view_count.to_string(),
            session.device.to_string(),
        ])?;
    }
    writer.flush()?;

    info!("Wrote {} session rows to {}", sessions.len(), path.display());
    Ok(sessions.len())
}

/// Write the event table to `path`, returning the number of data rows
pub fn write_events_csv(path: &Path, events: &[EventRecord]) -> GenerationResult<usize> {
    let mut writer = open_writer(path)?;

    writer.write_record([
        "id",
        "user_id",
        "session_id",
        "type",
        "page",
        "timestamp",
        "device",
        "country",
    ])?;
    for event in events {
        writer.write_record([
            event.id.to_string(),
            event.user_id.to_string(),
            event.session_id.to_string(),
            event.event_type.to_string(),
            event.page.clone(),
            event.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            event.device.to_string(),
            event.country.clone(),
        ])?;
    }
    writer.flush()?;

    info!("Wrote {} event rows to {}", events.len(), path.display());
    Ok(events.len())
}
