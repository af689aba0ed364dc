//! In-memory port implementations for loop tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use trafficwatch::domain::ConnectionSnapshot;
use trafficwatch::error::{NotifyError, StatsError};
use trafficwatch::port::{Notifier, StatsSource};

/// Stats source that fails the first `failures` calls, then succeeds.
#[derive(Clone)]
pub struct FlakyStats {
    calls: Arc<AtomicUsize>,
    failures: usize,
}

impl FlakyStats {
    pub fn failing_first(failures: usize) -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            failures,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StatsSource for FlakyStats {
    async fn query(&self) -> Result<ConnectionSnapshot, StatsError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if call <= self.failures {
            return Err(StatsError::Timeout(Duration::from_secs(2)));
        }
        Ok(ConnectionSnapshot::from_traffic(Some(5), 1024, 2048))
    }
}

/// Thread-safe message collector for notification assertions in tests.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.messages.lock().expect("lock notifier messages").len()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("lock notifier messages").clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, message: &str) -> Result<(), NotifyError> {
        self.messages
            .lock()
            .expect("lock notifier messages")
            .push(message.to_string());
        Ok(())
    }
}

/// Stats source whose query never completes.
pub struct StalledStats;

#[async_trait]
impl StatsSource for StalledStats {
    async fn query(&self) -> Result<ConnectionSnapshot, StatsError> {
        std::future::pending().await
    }
}
