//! Decoders for stats control-plane responses.

use std::sync::Arc;

use serde::Deserialize;

use crate::domain::ConnectionSnapshot;
use crate::error::StatsError;
use crate::port::StatsDecoder;

/// Decoder selection for configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DecoderKind {
    /// Ignore the payload and report every counter as unknown.
    #[default]
    Unknown,
    /// Parse the Xray `QueryStats` JSON shape.
    XrayJson,
}

impl DecoderKind {
    #[must_use]
    pub fn build(self) -> Arc<dyn StatsDecoder> {
        match self {
            Self::Unknown => Arc::new(UnknownDecoder),
            Self::XrayJson => Arc::new(XrayJsonDecoder),
        }
    }
}

/// Decoder that does not attempt to read the payload.
///
/// Reports all counters as unknown instead of fabricating zeros.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnknownDecoder;

impl StatsDecoder for UnknownDecoder {
    fn name(&self) -> &'static str {
        "unknown"
    }

    fn decode(&self, _raw: &[u8]) -> Result<ConnectionSnapshot, StatsError> {
        Ok(ConnectionSnapshot::unknown())
    }
}

#[derive(Deserialize)]
struct QueryStatsResponse {
    #[serde(default)]
    stat: Vec<Stat>,
}

#[derive(Deserialize)]
struct Stat {
    name: String,
    // Zero-valued counters are omitted by the protobuf JSON encoding.
    #[serde(default)]
    value: i64,
}

#[derive(Default)]
struct Traffic {
    seen: bool,
    uplink: u64,
    downlink: u64,
}

impl Traffic {
    fn add(&mut self, direction: &str, value: u64) {
        match direction {
            "uplink" => self.uplink = self.uplink.saturating_add(value),
            "downlink" => self.downlink = self.downlink.saturating_add(value),
            _ => return,
        }
        self.seen = true;
    }
}

/// Decoder for `{"stat":[{"name":"inbound>>>tag>>>traffic>>>uplink","value":N}]}`.
///
/// Inbound counters are preferred; per-user counters are used only when no
/// inbound counter is present, since both describe the same bytes. Outbound
/// counters are ignored. `*>>>online` entries are summed into the active
/// connection count.
#[derive(Debug, Clone, Copy, Default)]
pub struct XrayJsonDecoder;

impl StatsDecoder for XrayJsonDecoder {
    fn name(&self) -> &'static str {
        "xray-json"
    }

    fn decode(&self, raw: &[u8]) -> Result<ConnectionSnapshot, StatsError> {
        if raw.iter().all(u8::is_ascii_whitespace) {
            return Ok(ConnectionSnapshot::unknown());
        }

        let response: QueryStatsResponse = serde_json::from_slice(raw)
            .map_err(|e| StatsError::DecodeFailed(format!("invalid stats JSON: {e}")))?;

        let mut inbound = Traffic::default();
        let mut user = Traffic::default();
        let mut online: Option<u64> = None;

        for stat in response.stat {
            let value = u64::try_from(stat.value).map_err(|_| {
                StatsError::DecodeFailed(format!(
                    "negative counter {} for {}",
                    stat.value, stat.name
                ))
            })?;

            let parts: Vec<&str> = stat.name.split(">>>").collect();
            match parts.as_slice() {
                ["inbound", _, "traffic", direction] => inbound.add(direction, value),
                ["user", _, "traffic", direction] => user.add(direction, value),
                [_, _, "online"] => online = Some(online.unwrap_or(0).saturating_add(value)),
                _ => {}
            }
        }

        let traffic = if inbound.seen { inbound } else { user };
        if traffic.seen {
            Ok(ConnectionSnapshot::from_traffic(
                online,
                traffic.uplink,
                traffic.downlink,
            ))
        } else {
            Ok(ConnectionSnapshot::new(online, None, None))
        }
    }
}
