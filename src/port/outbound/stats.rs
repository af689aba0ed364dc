//! Stats control-plane ports.

use async_trait::async_trait;

use crate::domain::ConnectionSnapshot;
use crate::error::StatsError;

/// Source of connection and traffic counters.
///
/// Each call is an independent query; implementations keep no session state
/// between calls.
#[async_trait]
pub trait StatsSource: Send + Sync {
    /// Query the control plane once and return a fresh snapshot.
    ///
    /// # Errors
    ///
    /// Returns a [`StatsError`] when the endpoint cannot be reached, the
    /// query cannot be written, the deadline expires, or the response
    /// cannot be decoded.
    async fn query(&self) -> Result<ConnectionSnapshot, StatsError>;
}

/// Decoder for raw control-plane responses.
///
/// Decoding is kept behind this trait so the wire schema can be swapped
/// without touching the transport.
pub trait StatsDecoder: Send + Sync {
    /// Decoder name for logging.
    fn name(&self) -> &'static str;

    /// Decode the full response body into a snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::DecodeFailed`] for a malformed payload.
    fn decode(&self, raw: &[u8]) -> Result<ConnectionSnapshot, StatsError>;
}
