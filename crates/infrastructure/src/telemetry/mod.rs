//! Logging infrastructure
//!
//! Installs a `tracing-subscriber` pipeline writing to stderr, either human
//! readable or as JSON lines.

mod subscriber;

pub use subscriber::{TelemetryConfig, TelemetryError, init_telemetry};
