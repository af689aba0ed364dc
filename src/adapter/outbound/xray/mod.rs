//! Xray stats control-plane adapter.
//!
//! [`XrayStatsClient`] owns the transport: one short-lived TCP connection per
//! query, a line-delimited command, and a single deadline around the whole
//! exchange. Turning the raw response into counters is delegated to a
//! [`StatsDecoder`](crate::port::StatsDecoder) chosen by [`DecoderKind`].

mod client;
mod decoder;

pub use client::{StatsClientConfig, XrayStatsClient, MAX_RESPONSE_BYTES};
pub use decoder::{DecoderKind, UnknownDecoder, XrayJsonDecoder};
