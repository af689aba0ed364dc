//! Observable state of a running monitor.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Lifecycle state of the monitor loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorState {
    /// Constructed or stopped; no timer is armed.
    Idle,
    /// Timer armed; ticking until shutdown.
    Running,
}

/// Point-in-time copy of the tick counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickTotals {
    pub ticks: u64,
    pub delivered: u64,
    pub stats_failures: u64,
    pub delivery_failures: u64,
}

/// Lock-free counters shared between the loop and its observers.
#[derive(Debug, Default)]
pub struct MonitorStatus {
    running: AtomicBool,
    ticks: AtomicU64,
    delivered: AtomicU64,
    stats_failures: AtomicU64,
    delivery_failures: AtomicU64,
}

impl MonitorStatus {
    #[must_use]
    pub fn state(&self) -> MonitorState {
        if self.running.load(Ordering::Acquire) {
            MonitorState::Running
        } else {
            MonitorState::Idle
        }
    }

    #[must_use]
    pub fn totals(&self) -> TickTotals {
        TickTotals {
            ticks: self.ticks.load(Ordering::Relaxed),
            delivered: self.delivered.load(Ordering::Relaxed),
            stats_failures: self.stats_failures.load(Ordering::Relaxed),
            delivery_failures: self.delivery_failures.load(Ordering::Relaxed),
        }
    }

    pub(super) fn set_running(&self, running: bool) {
        self.running.store(running, Ordering::Release);
    }

    pub(super) fn record_tick(&self) {
        self.ticks.fetch_add(1, Ordering::Relaxed);
    }

    pub(super) fn record_delivered(&self) {
        self.delivered.fetch_add(1, Ordering::Relaxed);
    }

    pub(super) fn record_stats_failure(&self) {
        self.stats_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub(super) fn record_delivery_failure(&self) {
        self.delivery_failures.fetch_add(1, Ordering::Relaxed);
    }
}
