//! Timezone adapter - Implements TimezonePort using integration_routes

use std::fmt;

use application::error::ApplicationError;
use application::ports::TimezonePort;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::{GeoPoint, Timezone};
use integration_routes::{GoogleTimezoneClient, TimezoneClient, TimezoneConfig, TimezoneError};
use tracing::instrument;

/// Adapter for the Google Time Zone API
pub struct TimezoneAdapter {
    client: Box<dyn TimezoneClient>,
}

impl fmt::Debug for TimezoneAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimezoneAdapter").finish_non_exhaustive()
    }
}

impl TimezoneAdapter {
    /// Wrap an existing timezone client
    pub fn new(client: impl TimezoneClient + 'static) -> Self {
        Self {
            client: Box::new(client),
        }
    }

    /// Build the adapter from client configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn from_config(config: &TimezoneConfig) -> Result<Self, ApplicationError> {
        let client = GoogleTimezoneClient::new(config)
            .map_err(map_timezone_error)?;
        Ok(Self::new(client))
    }
}

#[async_trait]
impl TimezonePort for TimezoneAdapter {
    #[instrument(skip(self))]
    async fn lookup(
        &self,
        point: &GeoPoint,
        timestamp: DateTime<Utc>,
    ) -> Result<Timezone, ApplicationError> {
        self.client
            .lookup(point, timestamp)
            .await
            .map_err(map_timezone_error)
    }
}

fn map_timezone_error(err: TimezoneError) -> ApplicationError {
    match err {
        TimezoneError::ConfigurationError(message) => ApplicationError::Configuration(message),
        TimezoneError::ConnectionFailed(_)
        | TimezoneError::RequestFailed(_)
        | TimezoneError::LookupFailed { .. }
        | TimezoneError::ParseError(_)
        | TimezoneError::Timeout => ApplicationError::TimezoneLookupFailed(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingTimezone;

    #[async_trait]
    impl TimezoneClient for FailingTimezone {
        async fn lookup(
            &self,
            _point: &GeoPoint,
            _timestamp: DateTime<Utc>,
        ) -> Result<Timezone, TimezoneError> {
            Err(TimezoneError::LookupFailed {
                status: "ZERO_RESULTS".to_string(),
            })
        }
    }

    #[test]
    fn maps_lookup_failure() {
        let err = map_timezone_error(TimezoneError::LookupFailed {
            status: "INVALID_REQUEST".to_string(),
        });
        assert!(
            matches!(err, ApplicationError::TimezoneLookupFailed(m) if m.contains("INVALID_REQUEST"))
        );
    }

    #[test]
    fn maps_timeout_to_lookup_failure() {
        let err = map_timezone_error(TimezoneError::Timeout);
        assert!(matches!(err, ApplicationError::TimezoneLookupFailed(_)));
    }

    #[test]
    fn maps_configuration_error() {
        let err = map_timezone_error(TimezoneError::ConfigurationError("bad".to_string()));
        assert!(matches!(err, ApplicationError::Configuration(m) if m == "bad"));
    }

    #[tokio::test]
    async fn lookup_failure_surfaces_through_port() {
        let adapter = TimezoneAdapter::new(FailingTimezone);
        let point = GeoPoint::new(-1.2921, 36.8219).unwrap();

        let err = adapter.lookup(&point, Utc::now()).await.unwrap_err();
        assert!(matches!(err, ApplicationError::TimezoneLookupFailed(m) if m.contains("ZERO_RESULTS")));
    }
}
