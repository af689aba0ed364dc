//! Trafficwatch - periodic proxy traffic reports delivered to Telegram.
//!
//! A background reporter that polls a proxy server's stats control plane,
//! formats a short HTML summary, and posts it to an operator chat.
//!
//! # Architecture
//!
//! - **`domain`** - Snapshots, byte formatting, report text
//! - **`port`** - [`StatsSource`](port::StatsSource), [`StatsDecoder`](port::StatsDecoder)
//!   and [`Notifier`](port::Notifier) seams
//! - **`adapter`** - Xray TCP stats client, Telegram notifier, CLI
//! - **`application`** - The periodic [`Monitor`](application::monitor::Monitor) loop
//! - **`infrastructure`** - Configuration, wiring, background supervision
//!
//! Every tick is independent: a failed query or delivery is logged and the
//! next tick proceeds on schedule.
//!
//! # Example
//!
//! ```no_run
//! use trafficwatch::infrastructure::{bootstrap, supervisor};
//! use trafficwatch::infrastructure::config::{credentials::Credentials, settings::Config};
//!
//! # async fn start() -> trafficwatch::error::Result<()> {
//! let config = Config::load_or_default(None)?;
//! if let Some(handle) = supervisor::start_monitoring(Credentials::from_env(), |creds| {
//!     bootstrap::build_monitor(&config, creds)
//! }) {
//!     tokio::signal::ctrl_c().await?;
//!     handle.shutdown().await;
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
