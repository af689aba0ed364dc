//! One-shot diagnostic command handlers.

pub mod stats;
pub mod telegram;
