//! Routes error types

use thiserror::Error;

/// Errors that can occur while computing a route
#[derive(Debug, Error)]
pub enum RoutesError {
    /// The service answered with a status other than 200
    #[error("Request failed with status code {status_code}")]
    RequestFailed {
        /// HTTP status code returned by the service
        status_code: u16,
    },

    /// The request never produced an HTTP response (DNS, connect, reset, timeout)
    #[error("Request failed: {message}")]
    TransportError {
        /// Underlying transport message
        message: String,
    },

    /// The response contained no route candidates
    #[error("No route found")]
    NoRouteFound,

    /// The 200 response body could not be interpreted
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl RoutesError {
    pub(crate) fn from_reqwest(err: &reqwest::Error, timeout_secs: u64) -> Self {
        let message = if err.is_timeout() {
            format!("request timed out after {timeout_secs} seconds")
        } else {
            err.to_string()
        };
        Self::TransportError { message }
    }
}
