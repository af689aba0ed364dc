//! TCP client for the stats control plane.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

use crate::domain::ConnectionSnapshot;
use crate::error::StatsError;
use crate::port::{StatsDecoder, StatsSource};

/// Upper bound on a response body; anything larger is treated as malformed.
pub const MAX_RESPONSE_BYTES: u64 = 1024 * 1024;

/// Connection settings for [`XrayStatsClient`].
#[derive(Debug, Clone)]
pub struct StatsClientConfig {
    /// `host:port` of the control-plane listener.
    pub address: String,
    /// Deadline for connect, write and read combined.
    pub timeout: Duration,
    /// Service named on the first command line.
    pub service: String,
    /// Method named on the second command line.
    pub method: String,
}

impl Default for StatsClientConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1:10085".into(),
            timeout: Duration::from_secs(2),
            service: "StatsService".into(),
            method: "QueryStats".into(),
        }
    }
}

impl StatsClientConfig {
    /// The wire command: `"<Service>\n<Method>\n"`.
    #[must_use]
    pub fn command(&self) -> String {
        format!("{}\n{}\n", self.service, self.method)
    }
}

/// Stats client that dials the control plane fresh for every query.
pub struct XrayStatsClient {
    config: StatsClientConfig,
    decoder: Arc<dyn StatsDecoder>,
}

impl XrayStatsClient {
    #[must_use]
    pub fn new(config: StatsClientConfig, decoder: Arc<dyn StatsDecoder>) -> Self {
        Self { config, decoder }
    }

    #[must_use]
    pub fn config(&self) -> &StatsClientConfig {
        &self.config
    }

    /// Connect, send the command and collect the full response.
    ///
    /// The stream is owned by this future, so it is closed on every return
    /// path and also when the caller's deadline drops the future.
    async fn exchange(&self) -> Result<Vec<u8>, StatsError> {
        let address = &self.config.address;
        let mut stream = TcpStream::connect(address.as_str()).await.map_err(|source| {
            StatsError::ConnectFailed {
                address: address.clone(),
                source,
            }
        })?;

        stream
            .write_all(self.config.command().as_bytes())
            .await
            .map_err(StatsError::WriteFailed)?;
        // Half-close so servers that read to EOF know the command is complete.
        stream.shutdown().await.map_err(StatsError::WriteFailed)?;

        let mut raw = Vec::new();
        (&mut stream)
            .take(MAX_RESPONSE_BYTES + 1)
            .read_to_end(&mut raw)
            .await
            .map_err(|e| StatsError::DecodeFailed(format!("failed to read response: {e}")))?;

        if raw.len() as u64 > MAX_RESPONSE_BYTES {
            return Err(StatsError::DecodeFailed(format!(
                "response exceeds {MAX_RESPONSE_BYTES} bytes"
            )));
        }

        debug!(address = %address, bytes = raw.len(), "Stats response received");
        Ok(raw)
    }
}

#[async_trait]
impl StatsSource for XrayStatsClient {
    async fn query(&self) -> Result<ConnectionSnapshot, StatsError> {
        let deadline = self.config.timeout;
        let raw = tokio::time::timeout(deadline, self.exchange())
            .await
            .map_err(|_| StatsError::Timeout(deadline))??;

        self.decoder.decode(&raw)
    }
}
