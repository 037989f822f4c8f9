//! Route request entity and its builder
//!
//! A request carries the two user-facing endpoints, an optional departure
//! instant, and a fixed routing policy that is identical for every request.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::{GeoPoint, LocationInput};

/// Language requested for route instructions
pub const LANGUAGE_CODE: &str = "en-US";

/// Accepted local wall-clock formats, most specific first
const LOCAL_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Mode of travel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TravelMode {
    /// Passenger car
    #[default]
    Drive,
}

impl TravelMode {
    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Drive => "DRIVE",
        }
    }
}

/// How the routing service trades quality against latency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoutingPreference {
    /// Fastest route using live traffic
    #[default]
    TrafficAwareOptimal,
}

impl RoutingPreference {
    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TrafficAwareOptimal => "TRAFFIC_AWARE_OPTIMAL",
        }
    }
}

/// Unit system for display fields returned by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Units {
    /// Kilometers
    Metric,
    /// Miles
    #[default]
    Imperial,
}

impl Units {
    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Metric => "METRIC",
            Self::Imperial => "IMPERIAL",
        }
    }
}

/// Features the route should avoid
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RouteModifiers {
    /// Avoid toll roads
    pub avoid_tolls: bool,
    /// Avoid highways
    pub avoid_highways: bool,
    /// Avoid ferries
    pub avoid_ferries: bool,
}

/// A validated driving route request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteRequest {
    origin: GeoPoint,
    destination: GeoPoint,
    departure_time: Option<DateTime<Utc>>,
    travel_mode: TravelMode,
    routing_preference: RoutingPreference,
    compute_alternative_routes: bool,
    route_modifiers: RouteModifiers,
    language_code: &'static str,
    units: Units,
}

impl RouteRequest {
    /// Create a request between two resolved points
    ///
    /// `departure_time` of `None` lets the service assume "now".
    #[must_use]
    pub fn new(
        origin: GeoPoint,
        destination: GeoPoint,
        departure_time: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            origin,
            destination,
            departure_time,
            travel_mode: TravelMode::Drive,
            routing_preference: RoutingPreference::TrafficAwareOptimal,
            compute_alternative_routes: false,
            route_modifiers: RouteModifiers::default(),
            language_code: LANGUAGE_CODE,
            units: Units::Imperial,
        }
    }

    /// Build a request from form state
    ///
    /// `departure_time` is the raw form value; blank means "now", anything
    /// else is read as wall-clock time in `zone`.
    ///
    /// # Errors
    ///
    /// `MissingCoordinates` or `InvalidCoordinates` when an endpoint is not
    /// resolved, `InvalidDateTime` when the departure cannot be interpreted.
    pub fn from_form<Tz: TimeZone>(
        origin: &LocationInput,
        destination: &LocationInput,
        departure_time: &str,
        zone: &Tz,
    ) -> Result<Self, DomainError> {
        let origin = origin.to_point("origin")?;
        let destination = destination.to_point("destination")?;
        let departure_time = parse_departure_time(departure_time, zone)?;
        Ok(Self::new(origin, destination, departure_time))
    }

    pub const fn origin(&self) -> &GeoPoint {
        &self.origin
    }

    pub const fn destination(&self) -> &GeoPoint {
        &self.destination
    }

    pub const fn departure_time(&self) -> Option<DateTime<Utc>> {
        self.departure_time
    }

    pub const fn travel_mode(&self) -> TravelMode {
        self.travel_mode
    }

    pub const fn routing_preference(&self) -> RoutingPreference {
        self.routing_preference
    }

    pub const fn compute_alternative_routes(&self) -> bool {
        self.compute_alternative_routes
    }

    pub const fn route_modifiers(&self) -> RouteModifiers {
        self.route_modifiers
    }

    pub const fn language_code(&self) -> &'static str {
        self.language_code
    }

    pub const fn units(&self) -> Units {
        self.units
    }

    /// Departure as a UTC ISO-8601 instant with millisecond precision
    #[must_use]
    pub fn departure_time_rfc3339(&self) -> Option<String> {
        self.departure_time
            .map(|t| t.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

/// Interpret a departure-time form value
///
/// Blank input yields `None`. RFC 3339 input with an explicit offset is taken
/// as-is; otherwise the value is a local wall-clock time in `zone`. When a
/// DST transition makes the local time ambiguous the earlier instant wins.
///
/// # Errors
///
/// Returns `DomainError::InvalidDateTime` for unparseable input and for local
/// times skipped by a DST transition.
pub fn parse_departure_time<Tz: TimeZone>(
    input: &str,
    zone: &Tz,
) -> Result<Option<DateTime<Utc>>, DomainError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    if let Ok(absolute) = DateTime::parse_from_rfc3339(input) {
        return Ok(Some(absolute.with_timezone(&Utc)));
    }

    let naive = LOCAL_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .ok_or_else(|| DomainError::InvalidDateTime(input.to_string()))?;

    zone.from_local_datetime(&naive)
        .earliest()
        .map(|local| Some(local.with_timezone(&Utc)))
        .ok_or_else(|| {
            DomainError::InvalidDateTime(format!("{input} does not exist in the local timezone"))
        })
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone};

    use super::*;

    fn nairobi() -> FixedOffset {
        FixedOffset::east_opt(3 * 3600).unwrap()
    }

    fn resolved(lat: f64, lng: f64) -> LocationInput {
        LocationInput::from_coordinates(lat, lng)
    }

    #[test]
    fn new_applies_fixed_policy() {
        let request = RouteRequest::new(
            GeoPoint::new_unchecked(-1.2921, 36.8219),
            GeoPoint::new_unchecked(-1.3, 36.8),
            None,
        );
        assert_eq!(request.travel_mode(), TravelMode::Drive);
        assert_eq!(
            request.routing_preference(),
            RoutingPreference::TrafficAwareOptimal
        );
        assert!(!request.compute_alternative_routes());
        assert_eq!(request.route_modifiers(), RouteModifiers::default());
        assert_eq!(request.language_code(), "en-US");
        assert_eq!(request.units(), Units::Imperial);
    }

    #[test]
    fn from_form_requires_origin() {
        let result = RouteRequest::from_form(
            &LocationInput::unresolved("somewhere"),
            &resolved(-1.3, 36.8),
            "",
            &Utc,
        );
        assert!(matches!(
            result,
            Err(DomainError::MissingCoordinates { endpoint }) if endpoint == "origin"
        ));
    }

    #[test]
    fn from_form_requires_destination() {
        let result =
            RouteRequest::from_form(&resolved(-1.3, 36.8), &LocationInput::default(), "", &Utc);
        assert!(matches!(
            result,
            Err(DomainError::MissingCoordinates { endpoint }) if endpoint == "destination"
        ));
    }

    #[test]
    fn blank_departure_is_omitted() {
        let request =
            RouteRequest::from_form(&resolved(1.0, 2.0), &resolved(3.0, 4.0), "   ", &Utc)
                .unwrap();
        assert!(request.departure_time().is_none());
        assert!(request.departure_time_rfc3339().is_none());
    }

    #[test]
    fn local_departure_is_converted_to_utc() {
        let request = RouteRequest::from_form(
            &resolved(1.0, 2.0),
            &resolved(3.0, 4.0),
            "2024-07-01T08:30",
            &nairobi(),
        )
        .unwrap();
        assert_eq!(
            request.departure_time_rfc3339().as_deref(),
            Some("2024-07-01T05:30:00.000Z")
        );
    }

    #[test]
    fn departure_with_seconds() {
        let parsed = parse_departure_time("2024-07-01T08:30:15", &Utc).unwrap();
        assert_eq!(
            parsed,
            Some(Utc.with_ymd_and_hms(2024, 7, 1, 8, 30, 15).unwrap())
        );
    }

    #[test]
    fn explicit_offset_is_respected() {
        let parsed = parse_departure_time("2024-07-01T08:30:00+02:00", &nairobi()).unwrap();
        assert_eq!(
            parsed,
            Some(Utc.with_ymd_and_hms(2024, 7, 1, 6, 30, 0).unwrap())
        );
    }

    #[test]
    fn garbage_departure_is_rejected() {
        assert!(matches!(
            parse_departure_time("tomorrow-ish", &Utc),
            Err(DomainError::InvalidDateTime(_))
        ));
    }

    #[test]
    fn dst_gap_is_rejected() {
        let berlin = chrono_tz::Europe::Berlin;
        // Clocks jump from 02:00 to 03:00 on 2024-03-31
        assert!(parse_departure_time("2024-03-31T02:30", &berlin).is_err());
    }

    #[test]
    fn dst_overlap_takes_earlier_instant() {
        let berlin = chrono_tz::Europe::Berlin;
        // 02:30 happens twice on 2024-10-27; the first is still CEST (+02:00)
        let parsed = parse_departure_time("2024-10-27T02:30", &berlin).unwrap();
        assert_eq!(
            parsed,
            Some(Utc.with_ymd_and_hms(2024, 10, 27, 0, 30, 0).unwrap())
        );
    }

    #[test]
    fn policy_enums_have_wire_names() {
        assert_eq!(TravelMode::Drive.as_str(), "DRIVE");
        assert_eq!(
            RoutingPreference::TrafficAwareOptimal.as_str(),
            "TRAFFIC_AWARE_OPTIMAL"
        );
        assert_eq!(Units::Imperial.as_str(), "IMPERIAL");
        assert_eq!(
            serde_json::to_string(&Units::Metric).unwrap(),
            "\"METRIC\""
        );
    }
}
