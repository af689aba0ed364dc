//! Infrastructure layer.
//!
//! Provides technical concerns that support the application without containing
//! business logic: configuration, component wiring, and task supervision.
//!
//! # Submodules
//!
//! - [`bootstrap`] - Composition root for runtime wiring
//! - [`config`] - Configuration loading and validation
//! - [`supervisor`] - Background launch and shutdown of the monitor

pub mod bootstrap;
pub mod config;
pub mod supervisor;
