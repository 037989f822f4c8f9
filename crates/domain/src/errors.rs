//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A route endpoint has no resolved coordinates yet
    #[error("Missing coordinates for {endpoint}")]
    MissingCoordinates { endpoint: String },

    /// Coordinates outside the valid latitude/longitude range
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    /// Date/time parsing error
    #[error("Invalid date/time: {0}")]
    InvalidDateTime(String),

    /// Duration value that is neither seconds nor a `<digits>s` string
    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    /// Malformed encoded polyline
    #[error("Invalid polyline at byte {position}: {reason}")]
    InvalidPolyline { position: usize, reason: String },

    /// Unknown or malformed IANA timezone name
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// Country code that is not a two-letter ISO 3166-1 alpha-2 code
    #[error("Invalid country code: {0}")]
    InvalidCountryCode(String),

    /// Blank address submitted for resolution
    #[error("Address must not be empty")]
    EmptyAddress,
}

impl DomainError {
    /// Create a missing coordinates error for the given endpoint
    pub fn missing_coordinates(endpoint: impl Into<String>) -> Self {
        Self::MissingCoordinates {
            endpoint: endpoint.into(),
        }
    }

    pub(crate) fn invalid_polyline(position: usize, reason: impl Into<String>) -> Self {
        Self::InvalidPolyline {
            position,
            reason: reason.into(),
        }
    }

    /// Whether this error stems from user-entered form data
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::MissingCoordinates { .. }
                | Self::InvalidCoordinates(_)
                | Self::InvalidDateTime(_)
                | Self::InvalidCountryCode(_)
                | Self::EmptyAddress
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_coordinates_creates_correct_error() {
        let err = DomainError::missing_coordinates("origin");
        match err {
            DomainError::MissingCoordinates { ref endpoint } => {
                assert_eq!(endpoint, "origin");
            },
            _ => unreachable!("Expected MissingCoordinates error"),
        }
        assert_eq!(err.to_string(), "Missing coordinates for origin");
    }

    #[test]
    fn invalid_polyline_error_message() {
        let err = DomainError::invalid_polyline(4, "truncated value");
        assert_eq!(err.to_string(), "Invalid polyline at byte 4: truncated value");
    }

    #[test]
    fn invalid_duration_error_message() {
        let err = DomainError::InvalidDuration("abc".to_string());
        assert_eq!(err.to_string(), "Invalid duration: abc");
    }

    #[test]
    fn invalid_datetime_error_message() {
        let err = DomainError::InvalidDateTime("not a date".to_string());
        assert_eq!(err.to_string(), "Invalid date/time: not a date");
    }

    #[test]
    fn input_errors_are_classified() {
        assert!(DomainError::missing_coordinates("destination").is_input_error());
        assert!(DomainError::InvalidDateTime("x".to_string()).is_input_error());
        assert!(DomainError::EmptyAddress.is_input_error());
        assert!(!DomainError::InvalidDuration("x".to_string()).is_input_error());
        assert!(!DomainError::invalid_polyline(0, "x").is_input_error());
    }
}
