//! Value Objects - Immutable, identity-less domain primitives

mod country_code;
mod geo_point;
mod location_input;
mod timezone;

pub use country_code::CountryCode;
pub use geo_point::{GeoPoint, ResolvedPlace};
pub use location_input::LocationInput;
pub use timezone::Timezone;
