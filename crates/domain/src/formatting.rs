//! Display formatting for route results
//!
//! Pure derivations from a route response: distance text, duration text and
//! the Google Maps deep link.

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::GeoPoint;

const SECONDS_PER_HOUR: u64 = 3600;
const SECONDS_PER_MINUTE: u64 = 60;
const MAPS_DIR_URL: &str = "https://www.google.com/maps/dir/?api=1";

/// A duration as the Routes API reports it
///
/// The API encodes durations as protobuf `Duration` strings (`"5400s"`), but
/// plain integer seconds are accepted too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    /// Whole seconds
    Seconds(u64),
    /// Digits with an optional trailing `s` unit marker
    Text(String),
}

impl DurationValue {
    /// Resolve to whole seconds
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDuration` when the text form is not a run
    /// of ASCII digits optionally followed by `s`.
    pub fn seconds(&self) -> Result<u64, DomainError> {
        match self {
            Self::Seconds(secs) => Ok(*secs),
            Self::Text(text) => parse_duration_seconds(text),
        }
    }
}

impl From<u64> for DurationValue {
    fn from(secs: u64) -> Self {
        Self::Seconds(secs)
    }
}

impl From<&str> for DurationValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// Parse `"5400s"` or `"5400"` into seconds
///
/// # Errors
///
/// Returns `DomainError::InvalidDuration` for anything else (signs,
/// fractional seconds, empty input).
pub fn parse_duration_seconds(text: &str) -> Result<u64, DomainError> {
    let trimmed = text.trim();
    let digits = trimmed.strip_suffix('s').unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DomainError::InvalidDuration(text.to_string()));
    }
    digits
        .parse()
        .map_err(|_| DomainError::InvalidDuration(text.to_string()))
}

/// Format meters as kilometers with exactly two decimals
///
/// Rounds half up on the exact meter count, so `12345` becomes `"12.35 km"`.
#[must_use]
pub fn format_distance(distance_meters: u64) -> String {
    let hundredths = distance_meters.saturating_add(5) / 10;
    format!("{}.{:02} km", hundredths / 100, hundredths % 100)
}

/// Format seconds as `"{hours} hrs {minutes} mins"`, dropping leftover seconds
#[must_use]
pub fn format_duration(duration_seconds: u64) -> String {
    let hours = duration_seconds / SECONDS_PER_HOUR;
    let minutes = (duration_seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    format!("{hours} hrs {minutes} mins")
}

/// Format a raw duration value (`5400`, `"5400s"`)
///
/// # Errors
///
/// Propagates `DomainError::InvalidDuration` from [`DurationValue::seconds`].
pub fn format_duration_value(value: &DurationValue) -> Result<String, DomainError> {
    value.seconds().map(format_duration)
}

/// Google Maps driving directions link between the submitted endpoints
#[must_use]
pub fn maps_deep_link(origin: &GeoPoint, destination: &GeoPoint) -> String {
    format!(
        "{MAPS_DIR_URL}&origin={}&destination={}&travelmode=driving",
        origin.to_query_value(),
        destination.to_query_value()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_examples() {
        assert_eq!(format_distance(0), "0.00 km");
        assert_eq!(format_distance(1000), "1.00 km");
        assert_eq!(format_distance(1500), "1.50 km");
        assert_eq!(format_distance(12345), "12.35 km");
    }

    #[test]
    fn distance_small_values() {
        assert_eq!(format_distance(4), "0.00 km");
        assert_eq!(format_distance(5), "0.01 km");
        assert_eq!(format_distance(999), "1.00 km");
    }

    #[test]
    fn distance_large_values() {
        assert_eq!(format_distance(1_234_567), "1234.57 km");
    }

    #[test]
    fn duration_examples() {
        assert_eq!(format_duration(5400), "1 hrs 30 mins");
        assert_eq!(format_duration(3661), "1 hrs 1 mins");
        assert_eq!(format_duration(0), "0 hrs 0 mins");
        assert_eq!(format_duration(59), "0 hrs 0 mins");
        assert_eq!(format_duration(90_000), "25 hrs 0 mins");
    }

    #[test]
    fn duration_text_with_unit_marker() {
        assert_eq!(parse_duration_seconds("5400s").unwrap(), 5400);
        assert_eq!(parse_duration_seconds("5400").unwrap(), 5400);
        assert_eq!(
            format_duration_value(&DurationValue::from("5400s")).unwrap(),
            "1 hrs 30 mins"
        );
    }

    #[test]
    fn duration_text_rejects_garbage() {
        assert!(parse_duration_seconds("").is_err());
        assert!(parse_duration_seconds("s").is_err());
        assert!(parse_duration_seconds("-5s").is_err());
        assert!(parse_duration_seconds("1.5s").is_err());
        assert!(parse_duration_seconds("abc").is_err());
    }

    #[test]
    fn duration_value_deserializes_both_forms() {
        let numeric: DurationValue = serde_json::from_str("5400").unwrap();
        let text: DurationValue = serde_json::from_str("\"5400s\"").unwrap();
        assert_eq!(numeric.seconds().unwrap(), 5400);
        assert_eq!(text.seconds().unwrap(), 5400);
    }

    #[test]
    fn deep_link_nairobi() {
        let origin = GeoPoint::new(-1.2921, 36.8219).unwrap();
        let destination = GeoPoint::new(-1.3, 36.8).unwrap();
        assert_eq!(
            maps_deep_link(&origin, &destination),
            "https://www.google.com/maps/dir/?api=1&origin=-1.2921,36.8219&destination=-1.3,36.8&travelmode=driving"
        );
    }
}
