//! Infrastructure configuration modules.

pub mod credentials;
pub mod logging;
pub mod monitor;
pub mod settings;
pub mod stats;
pub mod telegram;
