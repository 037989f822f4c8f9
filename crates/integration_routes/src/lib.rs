//! Google Maps Platform integration for the traffic planner
//!
//! Three HTTP clients, each behind its own trait so the application layer
//! can be tested without a network:
//!
//! - [`RoutesClient`] / [`GoogleRoutesClient`]: traffic-aware driving routes
//!   via `directions/v2:computeRoutes`
//! - [`GeocodingClient`] / [`GoogleGeocodingClient`]: address resolution with
//!   an in-process cache
//! - [`TimezoneClient`] / [`GoogleTimezoneClient`]: IANA timezone of a
//!   coordinate
//!
//! # Example
//!
//! ```rust,ignore
//! use domain::{GeoPoint, RouteRequest};
//! use integration_routes::{GoogleRoutesClient, RoutesClient, RoutesConfig};
//!
//! let client = GoogleRoutesClient::new(&RoutesConfig::with_api_key("..."))?;
//! let request = RouteRequest::new(
//!     GeoPoint::new(-1.2921, 36.8219)?,
//!     GeoPoint::new(-1.3, 36.8)?,
//!     None, // depart now
//! );
//! let route = client.compute_route(&request).await?;
//! ```

mod client;
mod config;
mod error;
mod geocoding;
mod models;
mod timezone;

pub use client::{GoogleRoutesClient, RoutesClient};
pub use config::RoutesConfig;
pub use error::RoutesError;
pub use geocoding::{GeocodingClient, GeocodingConfig, GeocodingError, GoogleGeocodingClient};
pub use models::{ComputeRoutesRequest, FIELD_MASK};
pub use timezone::{GoogleTimezoneClient, TimezoneClient, TimezoneConfig, TimezoneError};
