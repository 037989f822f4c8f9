//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer on top of the Google
//! Maps Platform clients, and owns configuration loading and logging setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{
    AppConfig, GeocodingAppConfig, GoogleConfig, RoutesAppConfig, TimezoneAppConfig,
};
pub use telemetry::{TelemetryConfig, TelemetryError, init_telemetry};
