//! Prometheus metrics and structured logging for osrs-info.
//!
//! The library crates only emit `tracing` events and bump counters through
//! `Metrics`; installing a subscriber is left to the binary.

pub mod error;
pub mod logging;
pub mod metrics;

pub use error::{TelemetryError, TelemetryResult};
pub use logging::init_logging;
pub use metrics::Metrics;
