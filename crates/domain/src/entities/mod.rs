//! Entities - route requests and the results derived from them

mod route_request;
mod route_result;

pub use route_request::{
    LANGUAGE_CODE, RouteModifiers, RouteRequest, RoutingPreference, TravelMode, Units,
    parse_departure_time,
};
pub use route_result::{DecodedPath, DisplayArtifacts, RouteResult};
