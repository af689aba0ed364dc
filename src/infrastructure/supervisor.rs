//! Background launch and shutdown of the monitor loop.
//!
//! The loop runs as one detached task. Starting it never blocks the caller;
//! the returned [`MonitorHandle`] is only needed for graceful shutdown.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::application::monitor::{Monitor, MonitorStatus, TickTotals};
use crate::infrastructure::config::credentials::Credentials;

/// Handle to a spawned monitor.
///
/// Dropping the handle detaches the task: it keeps ticking until the
/// process exits.
pub struct MonitorHandle {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
    status: Arc<MonitorStatus>,
}

impl MonitorHandle {
    /// Tick counters and lifecycle state of the running loop.
    #[must_use]
    pub fn status(&self) -> &MonitorStatus {
        &self.status
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Signal shutdown and wait for the loop to exit.
    ///
    /// A tick in progress is abandoned at its next await point. Returns the
    /// final tick counters.
    pub async fn shutdown(self) -> TickTotals {
        let _ = self.shutdown.send(true);
        if let Err(e) = self.task.await {
            error!(error = %e, "Monitor task failed");
        }
        self.status.totals()
    }
}

/// Spawn `monitor` on the current runtime.
#[must_use]
pub fn spawn(monitor: Monitor) -> MonitorHandle {
    let (shutdown, shutdown_rx) = watch::channel(false);
    let status = monitor.status();
    let interval = monitor.interval();

    let task = tokio::spawn(async move { monitor.run(shutdown_rx).await });
    info!(
        interval_secs = interval.as_secs(),
        "Connection monitoring started"
    );

    MonitorHandle {
        shutdown,
        task,
        status,
    }
}

/// Start monitoring if credentials are present.
///
/// Absent credentials are the documented "disabled" state: an informational
/// line is logged, `build` is never called, and no tick ever runs.
pub fn start_monitoring<F>(credentials: Option<Credentials>, build: F) -> Option<MonitorHandle>
where
    F: FnOnce(&Credentials) -> Monitor,
{
    let Some(credentials) = credentials else {
        info!("Telegram not configured, monitoring disabled");
        return None;
    };

    Some(spawn(build(&credentials)))
}
