//! Periodic stats reporting loop.
//!
//! Each tick queries the stats source, renders a [`ReportMessage`], and hands
//! it to the notifier. Failures are logged and counted, never propagated: a
//! missed report is not retried and does not affect the next tick.
//!
//! The loop uses a true periodic timer. Ticks fire every `interval` measured
//! from start, regardless of how long the previous tick took; if a tick
//! overruns, the missed deadlines are skipped rather than replayed.

mod status;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{error, info, warn};

use crate::domain::ReportMessage;
use crate::error::{NotifyError, StatsError};
use crate::port::{Notifier, StatsSource};

pub use status::{MonitorState, MonitorStatus, TickTotals};

/// Default time between reports.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// Result of a single tick.
#[derive(Debug)]
pub enum TickOutcome {
    /// The report was accepted by the notifier.
    Delivered,
    /// The stats query failed; nothing was sent.
    StatsFailed(StatsError),
    /// The report was built but delivery failed.
    DeliveryFailed(NotifyError),
}

impl TickOutcome {
    #[must_use]
    pub const fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered)
    }
}

/// Stats-to-chat reporting loop.
pub struct Monitor {
    stats: Arc<dyn StatsSource>,
    notifier: Arc<dyn Notifier>,
    interval: Duration,
    status: Arc<MonitorStatus>,
}

impl Monitor {
    #[must_use]
    pub fn new(
        stats: Arc<dyn StatsSource>,
        notifier: Arc<dyn Notifier>,
        interval: Duration,
    ) -> Self {
        Self {
            stats,
            notifier,
            interval,
            status: Arc::new(MonitorStatus::default()),
        }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[must_use]
    pub fn state(&self) -> MonitorState {
        self.status.state()
    }

    /// Shared status handle, readable while the loop runs.
    #[must_use]
    pub fn status(&self) -> Arc<MonitorStatus> {
        Arc::clone(&self.status)
    }

    /// Run one query, format, send pass.
    pub async fn tick(&self) -> TickOutcome {
        self.status.record_tick();

        let snapshot = match self.stats.query().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(error = %e, "Failed to get stats");
                self.status.record_stats_failure();
                return TickOutcome::StatsFailed(e);
            }
        };

        let report = ReportMessage::now(&snapshot);
        match self.notifier.send(report.as_str()).await {
            Ok(()) => {
                info!("Report sent");
                self.status.record_delivered();
                TickOutcome::Delivered
            }
            Err(e) => {
                error!(error = %e, "Failed to send report");
                self.status.record_delivery_failure();
                TickOutcome::DeliveryFailed(e)
            }
        }
    }

    /// Tick every `interval` until `shutdown` carries `true`.
    ///
    /// The first tick fires one full interval after the call. Shutdown is
    /// honoured between ticks and also interrupts an in-flight tick at its
    /// next await point, abandoning that tick's report. If the sender is
    /// dropped without signalling, the loop keeps running until process exit.
    ///
    /// A zero interval, or one too large to schedule, is logged and the loop
    /// returns without ticking.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        let first = match Instant::now().checked_add(self.interval) {
            Some(first) if !self.interval.is_zero() => first,
            _ => {
                error!(interval = ?self.interval, "Monitor interval cannot be scheduled");
                return;
            }
        };
        let mut timer = tokio::time::interval_at(first, self.interval);
        timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

        self.status.set_running(true);
        info!(interval_secs = self.interval.as_secs(), "Monitor started");

        loop {
            tokio::select! {
                () = shutdown_requested(&mut shutdown) => break,
                _ = timer.tick() => {}
            }

            tokio::select! {
                () = shutdown_requested(&mut shutdown) => {
                    info!("Shutdown requested mid-tick, abandoning report");
                    break;
                }
                _ = self.tick() => {}
            }
        }

        self.status.set_running(false);
        info!("Monitor stopped");
    }
}

/// Resolve once shutdown is signalled; never resolve if the sender is gone.
async fn shutdown_requested(shutdown: &mut watch::Receiver<bool>) {
    if shutdown.wait_for(|stop| *stop).await.is_err() {
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::domain::ConnectionSnapshot;

    /// Fails the calls whose 1-based index is listed, succeeds otherwise.
    struct ScriptedStats {
        calls: AtomicUsize,
        fail_on: Vec<usize>,
    }

    impl ScriptedStats {
        fn failing_on(fail_on: Vec<usize>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail_on,
            }
        }
    }

    #[async_trait]
    impl StatsSource for ScriptedStats {
        async fn query(&self) -> Result<ConnectionSnapshot, StatsError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            if self.fail_on.contains(&call) {
                Err(StatsError::Timeout(Duration::from_secs(2)))
            } else {
                Ok(ConnectionSnapshot::from_traffic(Some(2), 2048, 4096))
            }
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        messages: Mutex<Vec<String>>,
        reject: bool,
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn send(&self, message: &str) -> Result<(), NotifyError> {
            if self.reject {
                return Err(NotifyError::DeliveryRejected {
                    status: 403,
                    body: "Forbidden".into(),
                });
            }
            self.messages.lock().unwrap().push(message.to_string());
            Ok(())
        }
    }

    #[tokio::test]
    async fn failed_query_skips_delivery() {
        let stats = Arc::new(ScriptedStats::failing_on(vec![1]));
        let notifier = Arc::new(RecordingNotifier::default());
        let monitor = Monitor::new(stats, notifier.clone(), DEFAULT_INTERVAL);

        let outcome = monitor.tick().await;
        assert!(matches!(outcome, TickOutcome::StatsFailed(StatsError::Timeout(_))));
        assert!(notifier.messages.lock().unwrap().is_empty());

        let outcome = monitor.tick().await;
        assert!(outcome.is_delivered());

        let messages = notifier.messages.lock().unwrap();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("<b>Active Connections:</b> 2"));
        assert!(messages[0].contains("<b>Total Traffic:</b> 6.00 KB"));
    }

    #[tokio::test]
    async fn delivery_failure_is_distinct_from_stats_failure() {
        let stats = Arc::new(ScriptedStats::failing_on(vec![]));
        let notifier = Arc::new(RecordingNotifier {
            reject: true,
            ..RecordingNotifier::default()
        });
        let monitor = Monitor::new(stats, notifier, DEFAULT_INTERVAL);

        let outcome = monitor.tick().await;
        assert!(matches!(
            outcome,
            TickOutcome::DeliveryFailed(NotifyError::DeliveryRejected { status: 403, .. })
        ));

        let totals = monitor.status().totals();
        assert_eq!(totals.ticks, 1);
        assert_eq!(totals.delivery_failures, 1);
        assert_eq!(totals.stats_failures, 0);
        assert_eq!(totals.delivered, 0);
    }

    #[tokio::test]
    async fn monitor_is_idle_until_run() {
        let monitor = Monitor::new(
            Arc::new(ScriptedStats::failing_on(vec![])),
            Arc::new(RecordingNotifier::default()),
            DEFAULT_INTERVAL,
        );
        assert_eq!(monitor.state(), MonitorState::Idle);
        assert_eq!(monitor.interval(), Duration::from_secs(300));
    }

    #[tokio::test]
    async fn run_refuses_unschedulable_interval() {
        for interval in [Duration::ZERO, Duration::MAX] {
            let stats = Arc::new(ScriptedStats::failing_on(vec![]));
            let monitor = Monitor::new(
                stats.clone(),
                Arc::new(RecordingNotifier::default()),
                interval,
            );
            let (_tx, rx) = watch::channel(false);

            tokio::time::timeout(Duration::from_secs(1), monitor.run(rx))
                .await
                .expect("run returns instead of panicking");

            assert_eq!(monitor.state(), MonitorState::Idle);
            assert_eq!(stats.calls.load(Ordering::SeqCst), 0);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn run_stops_on_shutdown_signal() {
        let monitor = Arc::new(Monitor::new(
            Arc::new(ScriptedStats::failing_on(vec![])),
            Arc::new(RecordingNotifier::default()),
            Duration::from_secs(60),
        ));
        let (tx, rx) = watch::channel(false);

        let runner = Arc::clone(&monitor);
        let task = tokio::spawn(async move { runner.run(rx).await });

        tokio::time::sleep(Duration::from_secs(150)).await;
        assert_eq!(monitor.state(), MonitorState::Running);

        tx.send(true).unwrap();
        task.await.unwrap();

        assert_eq!(monitor.state(), MonitorState::Idle);
        assert_eq!(monitor.status().totals().ticks, 2);
    }
}
