//! Timezone value object

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// A timezone identifier (IANA timezone name)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Timezone(String);

impl Timezone {
    /// Create a new timezone without validation
    #[must_use]
    pub fn new(tz: impl Into<String>) -> Self {
        Self(tz.into())
    }

    /// Create a timezone validated against the IANA database
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimezone` for names chrono-tz does not know.
    pub fn parse(tz: &str) -> Result<Self, DomainError> {
        let tz = tz.trim();
        tz.parse::<Tz>()
            .map(|_| Self(tz.to_string()))
            .map_err(|_| DomainError::InvalidTimezone(tz.to_string()))
    }

    /// Get the timezone string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolve to a chrono-tz zone, if the name is known
    #[must_use]
    pub fn to_tz(&self) -> Option<Tz> {
        self.0.parse().ok()
    }

    /// Check if this is a UTC timezone
    #[must_use]
    pub fn is_utc(&self) -> bool {
        matches!(self.0.as_str(), "UTC" | "Etc/UTC" | "Etc/GMT")
    }

    /// UTC timezone
    #[must_use]
    pub fn utc() -> Self {
        Self("UTC".to_string())
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Self::utc()
    }
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Timezone {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Timezone {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timezone_creation() {
        let tz = Timezone::new("Africa/Nairobi");
        assert_eq!(tz.as_str(), "Africa/Nairobi");
    }

    #[test]
    fn test_timezone_default() {
        let tz = Timezone::default();
        assert_eq!(tz.as_str(), "UTC");
    }

    #[test]
    fn test_timezone_is_utc() {
        assert!(Timezone::utc().is_utc());
        assert!(Timezone::new("Etc/UTC").is_utc());
        assert!(Timezone::new("Etc/GMT").is_utc());
        assert!(!Timezone::new("Africa/Nairobi").is_utc());
    }

    #[test]
    fn test_parse_known_zone() {
        let tz = Timezone::parse("Africa/Nairobi").expect("known zone");
        assert_eq!(tz.to_tz(), Some(chrono_tz::Africa::Nairobi));
    }

    #[test]
    fn test_parse_unknown_zone() {
        assert!(matches!(
            Timezone::parse("Mars/Olympus_Mons"),
            Err(DomainError::InvalidTimezone(_))
        ));
    }

    #[test]
    fn test_unvalidated_zone_has_no_tz() {
        assert!(Timezone::new("nope").to_tz().is_none());
    }

    #[test]
    fn test_timezone_serialization() {
        let tz = Timezone::new("Africa/Nairobi");
        let json = serde_json::to_string(&tz).expect("serialize");
        assert_eq!(json, "\"Africa/Nairobi\"");

        let deserialized: Timezone = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(tz, deserialized);
    }
}
