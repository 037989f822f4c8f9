//! Domain layer for the traffic planner
//!
//! Contains the route request builder, the response interpreter (distance and
//! duration text, polyline decoding, deep links) and the value objects they
//! share. Everything here is pure and synchronous.

pub mod entities;
pub mod errors;
pub mod formatting;
pub mod polyline;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use formatting::{
    DurationValue, format_distance, format_duration, format_duration_value, maps_deep_link,
    parse_duration_seconds,
};
pub use value_objects::*;
