//! Human-readable byte magnitudes.

const KIB: u64 = 1024;
const MIB: u64 = KIB * 1024;
const GIB: u64 = MIB * 1024;

/// Format a byte count using binary (1024-based) units.
///
/// Values below 1 KiB print as whole bytes; everything else prints with two
/// decimals in the largest unit not exceeding the value, capped at GB.
/// Exact boundaries fall into the larger unit, so `1024` is `"1.00 KB"`.
///
/// Counts are unsigned, so negative input cannot reach this function.
#[must_use]
pub fn format_bytes(bytes: u64) -> String {
    if bytes < KIB {
        format!("{bytes} B")
    } else if bytes < MIB {
        format!("{:.2} KB", bytes as f64 / KIB as f64)
    } else if bytes < GIB {
        format!("{:.2} MB", bytes as f64 / MIB as f64)
    } else {
        format!("{:.2} GB", bytes as f64 / GIB as f64)
    }
}

/// Format an optional byte counter, rendering `None` as `"unknown"`.
#[must_use]
pub fn format_counter(bytes: Option<u64>) -> String {
    bytes.map_or_else(|| "unknown".to_string(), format_bytes)
}
