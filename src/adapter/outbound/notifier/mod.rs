//! Notification adapters.
//!
//! Implements the `port::Notifier` trait for report delivery backends.

mod log;

pub mod telegram;

pub use log::LogNotifier;
