//! Infrastructure adapters
//!
//! Implement application ports on top of the `integration_routes` clients.

mod geocoding_adapter;
mod routes_adapter;
mod timezone_adapter;

pub use geocoding_adapter::GeocodingAdapter;
pub use routes_adapter::RoutesAdapter;
pub use timezone_adapter::TimezoneAdapter;
