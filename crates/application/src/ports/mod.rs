//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod auth_provider;
mod calendar_port;
mod geo_resolver_port;
mod map_renderer;
mod routes_port;
mod timezone_port;

#[cfg(test)]
pub use auth_provider::MockAuthProvider;
pub use auth_provider::AuthProvider;
#[cfg(test)]
pub use calendar_port::MockCalendarPort;
pub use calendar_port::{
    CalendarError, CalendarPort, EventReminders, EventTime, NewEvent, ReminderMethod,
    ReminderOverride,
};
#[cfg(test)]
pub use geo_resolver_port::MockGeoResolverPort;
pub use geo_resolver_port::GeoResolverPort;
#[cfg(test)]
pub use map_renderer::MockMapRenderer;
pub use map_renderer::{MapRenderer, MapView};
#[cfg(test)]
pub use routes_port::MockRoutesPort;
pub use routes_port::RoutesPort;
#[cfg(test)]
pub use timezone_port::MockTimezonePort;
pub use timezone_port::TimezonePort;
