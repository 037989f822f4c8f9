//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Form input cannot be turned into a request; nothing was sent
    #[error("Invalid input: {0}")]
    InvalidInput(DomainError),

    /// Routing service answered with a status other than 200
    #[error("Request failed with status code {status_code}")]
    RequestFailed {
        /// HTTP status code
        status_code: u16,
    },

    /// No HTTP response was obtained
    #[error("Request failed: {message}")]
    TransportError {
        /// Underlying transport message
        message: String,
    },

    /// The routing service found no route between the endpoints
    #[error("No route found")]
    NoRouteFound,

    /// A response body could not be interpreted
    #[error("Invalid response: {message}")]
    InvalidResponse {
        /// Parse failure detail
        message: String,
    },

    /// Timezone could not be determined
    #[error("Timezone lookup failed: {0}")]
    TimezoneLookupFailed(String),

    /// Address could not be resolved to a place
    #[error("Address not found: {0}")]
    AddressNotFound(String),

    /// User not authorized
    #[error("Not authorized: {0}")]
    NotAuthorized(String),

    /// External service error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Domain-level error
    #[error(transparent)]
    Domain(DomainError),
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        if err.is_input_error() {
            Self::InvalidInput(err)
        } else {
            Self::Domain(err)
        }
    }
}

impl ApplicationError {
    /// Whether the user can fix this by editing the form
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::AddressNotFound(_))
    }

    /// Single line shown to the user at the submission boundary
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidInput(cause) => input_message(cause),
            Self::NoRouteFound => "No route found between the selected locations".to_string(),
            Self::NotAuthorized(_) => "Sign in to add the route to your calendar".to_string(),
            other => format!("Error fetching route: {other}"),
        }
    }
}

fn input_message(cause: &DomainError) -> String {
    match cause {
        DomainError::MissingCoordinates { .. } | DomainError::InvalidCoordinates(_) => {
            format!("Please select both an origin and a destination ({cause})")
        },
        DomainError::InvalidDateTime(_) => {
            format!("Please enter the departure time as YYYY-MM-DDTHH:MM ({cause})")
        },
        DomainError::InvalidCountryCode(_) => {
            format!("Please choose a two-letter country code ({cause})")
        },
        DomainError::EmptyAddress => "Please enter an address".to_string(),
        other => format!("Please check your input ({other})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_coordinates_become_invalid_input() {
        let err = ApplicationError::from(DomainError::missing_coordinates("origin"));
        assert!(matches!(err, ApplicationError::InvalidInput(_)));
        assert!(err.is_input_error());
    }

    #[test]
    fn missing_coordinates_ask_for_both_endpoints() {
        let err = ApplicationError::from(DomainError::missing_coordinates("destination"));
        assert_eq!(
            err.user_message(),
            "Please select both an origin and a destination (Missing coordinates for destination)"
        );
    }

    #[test]
    fn bad_departure_time_names_the_format() {
        let err = ApplicationError::from(DomainError::InvalidDateTime("next tuesday".to_string()));
        let message = err.user_message();

        assert!(matches!(err, ApplicationError::InvalidInput(_)));
        assert_eq!(
            message,
            "Please enter the departure time as YYYY-MM-DDTHH:MM (Invalid date/time: next tuesday)"
        );
        assert!(!message.contains("origin"));
    }

    #[test]
    fn bad_country_code_message() {
        let err = ApplicationError::from(DomainError::InvalidCountryCode("Kenya".to_string()));
        assert_eq!(
            err.user_message(),
            "Please choose a two-letter country code (Invalid country code: Kenya)"
        );
    }

    #[test]
    fn empty_address_message() {
        let err = ApplicationError::InvalidInput(DomainError::EmptyAddress);
        assert_eq!(err.user_message(), "Please enter an address");
    }

    #[test]
    fn polyline_errors_stay_domain_errors() {
        let err = ApplicationError::from(DomainError::InvalidPolyline {
            position: 3,
            reason: "truncated value".to_string(),
        });
        assert!(matches!(err, ApplicationError::Domain(_)));
        assert!(!err.is_input_error());
    }

    #[test]
    fn request_failed_message_carries_status() {
        let err = ApplicationError::RequestFailed { status_code: 500 };
        assert_eq!(
            err.user_message(),
            "Error fetching route: Request failed with status code 500"
        );
    }

    #[test]
    fn transport_message_is_verbatim() {
        let err = ApplicationError::TransportError {
            message: "connection reset by peer".to_string(),
        };
        assert!(err.user_message().contains("connection reset by peer"));
    }

    #[test]
    fn no_route_message() {
        assert_eq!(
            ApplicationError::NoRouteFound.user_message(),
            "No route found between the selected locations"
        );
    }
}
