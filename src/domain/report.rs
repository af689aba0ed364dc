//! Report text sent to the operator chat.

use std::fmt;

use chrono::{Local, NaiveDateTime};

use super::snapshot::ConnectionSnapshot;
use super::traffic::format_counter;

/// Wall-clock format used in the report's timestamp line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formatted, HTML-flavoured summary of one snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportMessage(String);

impl ReportMessage {
    /// Build a report stamped with the current local time.
    #[must_use]
    pub fn now(snapshot: &ConnectionSnapshot) -> Self {
        Self::build(snapshot, Local::now().naive_local())
    }

    /// Build a report for `snapshot` stamped with `timestamp`.
    #[must_use]
    pub fn build(snapshot: &ConnectionSnapshot, timestamp: NaiveDateTime) -> Self {
        let active = snapshot
            .active_connections()
            .map_or_else(|| "unknown".to_string(), |n| n.to_string());

        Self(format!(
            "<b>📊 Server Stats</b>\n\
             <b>Active Connections:</b> {}\n\
             <b>Upload Traffic:</b> {}\n\
             <b>Download Traffic:</b> {}\n\
             <b>Total Traffic:</b> {}\n\
             <b>Timestamp:</b> {}",
            active,
            format_counter(snapshot.upload_bytes()),
            format_counter(snapshot.download_bytes()),
            format_counter(snapshot.total_bytes()),
            timestamp.format(TIMESTAMP_FORMAT),
        ))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ReportMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
