//! Routes API wire models
//!
//! Request and response shapes of `directions/v2:computeRoutes`. Only the
//! fields named in [`FIELD_MASK`] are ever present in responses.

use domain::{DurationValue, GeoPoint, RouteRequest, RouteResult};
use serde::{Deserialize, Serialize};

use crate::error::RoutesError;

/// Response fields requested from the service
pub const FIELD_MASK: &str = "routes.duration,routes.distanceMeters,routes.polyline.encodedPolyline";

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "X-Goog-Api-Key";

/// Header carrying the response field mask
pub const FIELD_MASK_HEADER: &str = "X-Goog-FieldMask";

/// JSON body of a computeRoutes call
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputeRoutesRequest {
    pub origin: Waypoint,
    pub destination: Waypoint,
    pub travel_mode: &'static str,
    pub routing_preference: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure_time: Option<String>,
    pub compute_alternative_routes: bool,
    pub route_modifiers: WireRouteModifiers,
    pub language_code: &'static str,
    pub units: &'static str,
}

impl From<&RouteRequest> for ComputeRoutesRequest {
    fn from(request: &RouteRequest) -> Self {
        let modifiers = request.route_modifiers();
        Self {
            origin: Waypoint::from(request.origin()),
            destination: Waypoint::from(request.destination()),
            travel_mode: request.travel_mode().as_str(),
            routing_preference: request.routing_preference().as_str(),
            departure_time: request.departure_time_rfc3339(),
            compute_alternative_routes: request.compute_alternative_routes(),
            route_modifiers: WireRouteModifiers {
                avoid_tolls: modifiers.avoid_tolls,
                avoid_highways: modifiers.avoid_highways,
                avoid_ferries: modifiers.avoid_ferries,
            },
            language_code: request.language_code(),
            units: request.units().as_str(),
        }
    }
}

/// `{ location: { latLng: { latitude, longitude } } }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Waypoint {
    pub location: WireLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WireLocation {
    pub lat_lng: WireLatLng,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WireLatLng {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&GeoPoint> for Waypoint {
    fn from(point: &GeoPoint) -> Self {
        Self {
            location: WireLocation {
                lat_lng: WireLatLng {
                    latitude: point.latitude(),
                    longitude: point.longitude(),
                },
            },
        }
    }
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WireRouteModifiers {
    pub avoid_tolls: bool,
    pub avoid_highways: bool,
    pub avoid_ferries: bool,
}

// --- Raw API response types for deserialization ---

/// computeRoutes response; `routes` is absent when nothing was found
#[derive(Debug, Deserialize)]
pub(crate) struct RawComputeRoutesResponse {
    #[serde(default)]
    pub routes: Vec<RawRoute>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawRoute {
    // proto3 JSON omits zero values, so every field may be missing
    pub duration: Option<DurationValue>,
    pub distance_meters: Option<u64>,
    pub polyline: Option<RawPolyline>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawPolyline {
    pub encoded_polyline: Option<String>,
}

impl RawRoute {
    pub(crate) fn into_result(self) -> Result<RouteResult, RoutesError> {
        let duration_seconds = self
            .duration
            .map(|d| d.seconds())
            .transpose()
            .map_err(|e| RoutesError::InvalidResponse(e.to_string()))?
            .unwrap_or(0);

        Ok(RouteResult::new(
            self.distance_meters.unwrap_or(0),
            duration_seconds,
            self.polyline
                .and_then(|p| p.encoded_polyline)
                .unwrap_or_default(),
        ))
    }
}

/// Parse a 200 response body and select the first route
pub(crate) fn parse_first_route(body: &str) -> Result<RouteResult, RoutesError> {
    let raw: RawComputeRoutesResponse =
        serde_json::from_str(body).map_err(|e| RoutesError::InvalidResponse(e.to_string()))?;

    raw.routes
        .into_iter()
        .next()
        .ok_or(RoutesError::NoRouteFound)?
        .into_result()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    use super::*;

    fn sample_request(departure: bool) -> RouteRequest {
        RouteRequest::new(
            GeoPoint::new_unchecked(-1.2921, 36.8219),
            GeoPoint::new_unchecked(-1.3, 36.8),
            departure.then(|| Utc.with_ymd_and_hms(2024, 7, 1, 5, 30, 0).unwrap()),
        )
    }

    #[test]
    fn test_request_payload_shape() {
        let payload = ComputeRoutesRequest::from(&sample_request(true));
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            value,
            json!({
                "origin": { "location": { "latLng": { "latitude": -1.2921, "longitude": 36.8219 } } },
                "destination": { "location": { "latLng": { "latitude": -1.3, "longitude": 36.8 } } },
                "travelMode": "DRIVE",
                "routingPreference": "TRAFFIC_AWARE_OPTIMAL",
                "departureTime": "2024-07-01T05:30:00.000Z",
                "computeAlternativeRoutes": false,
                "routeModifiers": {
                    "avoidTolls": false,
                    "avoidHighways": false,
                    "avoidFerries": false
                },
                "languageCode": "en-US",
                "units": "IMPERIAL"
            })
        );
    }

    #[test]
    fn test_departure_omitted_when_absent() {
        let payload = ComputeRoutesRequest::from(&sample_request(false));
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("departureTime").is_none());
    }

    #[test]
    fn test_parse_first_route() {
        let body = r#"{
            "routes": [
                { "duration": "5400s", "distanceMeters": 12345, "polyline": { "encodedPolyline": "_p~iF~ps|U" } },
                { "duration": "60s", "distanceMeters": 1, "polyline": { "encodedPolyline": "??" } }
            ]
        }"#;
        let result = parse_first_route(body).unwrap();
        assert_eq!(result, RouteResult::new(12345, 5400, "_p~iF~ps|U"));
    }

    #[test]
    fn test_parse_empty_routes() {
        assert!(matches!(
            parse_first_route(r#"{ "routes": [] }"#),
            Err(RoutesError::NoRouteFound)
        ));
    }

    #[test]
    fn test_parse_missing_routes_key() {
        assert!(matches!(
            parse_first_route("{}"),
            Err(RoutesError::NoRouteFound)
        ));
    }

    #[test]
    fn test_parse_zero_values_omitted() {
        let result = parse_first_route(r#"{ "routes": [ {} ] }"#).unwrap();
        assert_eq!(result, RouteResult::new(0, 0, ""));
    }

    #[test]
    fn test_parse_invalid_duration() {
        let body = r#"{ "routes": [ { "duration": "1.5h" } ] }"#;
        assert!(matches!(
            parse_first_route(body),
            Err(RoutesError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(matches!(
            parse_first_route("not json"),
            Err(RoutesError::InvalidResponse(_))
        ));
    }
}
