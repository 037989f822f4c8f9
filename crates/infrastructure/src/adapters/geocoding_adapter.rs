//! Geocoding adapter - Implements GeoResolverPort using integration_routes

use std::fmt;

use application::error::ApplicationError;
use application::ports::GeoResolverPort;
use async_trait::async_trait;
use domain::{CountryCode, ResolvedPlace};
use integration_routes::{
    GeocodingClient, GeocodingConfig, GeocodingError, GoogleGeocodingClient,
};
use tracing::instrument;

/// Adapter for the Google Geocoding API
pub struct GeocodingAdapter {
    client: Box<dyn GeocodingClient>,
}

impl fmt::Debug for GeocodingAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeocodingAdapter").finish_non_exhaustive()
    }
}

impl GeocodingAdapter {
    /// Wrap an existing geocoding client
    pub fn new(client: impl GeocodingClient + 'static) -> Self {
        Self {
            client: Box::new(client),
        }
    }

    /// Build the adapter from client configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn from_config(config: &GeocodingConfig) -> Result<Self, ApplicationError> {
        let client = GoogleGeocodingClient::new(config)
            .map_err(map_geocoding_error)?;
        Ok(Self::new(client))
    }
}

#[async_trait]
impl GeoResolverPort for GeocodingAdapter {
    #[instrument(skip(self))]
    async fn resolve(
        &self,
        query: &str,
        country: Option<CountryCode>,
    ) -> Result<ResolvedPlace, ApplicationError> {
        self.client
            .geocode(query, country.as_ref())
            .await
            .map_err(map_geocoding_error)
    }
}

fn map_geocoding_error(err: GeocodingError) -> ApplicationError {
    match err {
        GeocodingError::AddressNotFound(address) => ApplicationError::AddressNotFound(address),
        GeocodingError::Timeout | GeocodingError::ConnectionFailed(_) => {
            ApplicationError::TransportError {
                message: err.to_string(),
            }
        },
        GeocodingError::RequestFailed(_) | GeocodingError::ParseError(_) => {
            ApplicationError::ExternalService(err.to_string())
        },
        GeocodingError::ConfigurationError(message) => ApplicationError::Configuration(message),
    }
}
