//! Point-in-time connection and traffic counters.

/// Counters reported by one stats query.
///
/// Every field is optional: `None` means the decoder could not (or did not
/// try to) determine the value. Unknown counters are never reported as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConnectionSnapshot {
    active_connections: Option<u64>,
    upload_bytes: Option<u64>,
    download_bytes: Option<u64>,
    total_bytes: Option<u64>,
}

impl ConnectionSnapshot {
    /// A snapshot with every counter unknown.
    #[must_use]
    pub const fn unknown() -> Self {
        Self {
            active_connections: None,
            upload_bytes: None,
            download_bytes: None,
            total_bytes: None,
        }
    }

    /// Build a snapshot from partially known counters.
    ///
    /// The total is only known when both directions are.
    #[must_use]
    pub const fn new(
        active_connections: Option<u64>,
        upload_bytes: Option<u64>,
        download_bytes: Option<u64>,
    ) -> Self {
        match (upload_bytes, download_bytes) {
            (Some(up), Some(down)) => Self::from_traffic(active_connections, up, down),
            _ => Self {
                active_connections,
                upload_bytes,
                download_bytes,
                total_bytes: None,
            },
        }
    }

    /// Build a snapshot from known traffic counters.
    ///
    /// The total is derived as `upload + download` (saturating).
    #[must_use]
    pub const fn from_traffic(
        active_connections: Option<u64>,
        upload_bytes: u64,
        download_bytes: u64,
    ) -> Self {
        Self {
            active_connections,
            upload_bytes: Some(upload_bytes),
            download_bytes: Some(download_bytes),
            total_bytes: Some(upload_bytes.saturating_add(download_bytes)),
        }
    }

    #[must_use]
    pub const fn active_connections(&self) -> Option<u64> {
        self.active_connections
    }

    #[must_use]
    pub const fn upload_bytes(&self) -> Option<u64> {
        self.upload_bytes
    }

    #[must_use]
    pub const fn download_bytes(&self) -> Option<u64> {
        self.download_bytes
    }

    #[must_use]
    pub const fn total_bytes(&self) -> Option<u64> {
        self.total_bytes
    }

    /// True when no counter is known.
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        self.active_connections.is_none()
            && self.upload_bytes.is_none()
            && self.download_bytes.is_none()
            && self.total_bytes.is_none()
    }

    /// Check `total >= upload` and `total >= download`.
    ///
    /// Vacuously true unless all three byte counters are known.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        match (self.upload_bytes, self.download_bytes, self.total_bytes) {
            (Some(up), Some(down), Some(total)) => total >= up && total >= down,
            _ => true,
        }
    }
}
