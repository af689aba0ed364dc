//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports are the seams between the monitor loop and the outside world.
//! Adapters implement them for concrete transports.
//!
//! ```text
//!   ┌─────────────┐       ┌─────────────────┐       ┌───────────┐
//!   │ StatsSource │ ────▶ │  Monitor (app)  │ ────▶ │ Notifier  │
//!   │   adapter   │       │ domain + ports  │       │  adapter  │
//!   └─────────────┘       └─────────────────┘       └───────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`StatsSource`] - One-shot counter query against a control plane
//! - [`StatsDecoder`] - Pluggable decoding of the raw control-plane response
//! - [`Notifier`] - Delivery of formatted reports

pub mod outbound;

pub use outbound::notifier::Notifier;
pub use outbound::stats::{StatsDecoder, StatsSource};
