//! Transport-agnostic domain logic: snapshots, formatting, report text.

mod report;
mod snapshot;
mod traffic;

pub use report::{ReportMessage, TIMESTAMP_FORMAT};
pub use snapshot::ConnectionSnapshot;
pub use traffic::{format_bytes, format_counter};
