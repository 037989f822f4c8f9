//! Routes adapter - Implements RoutesPort using integration_routes

use std::fmt;

use application::error::ApplicationError;
use application::ports::RoutesPort;
use async_trait::async_trait;
use domain::{RouteRequest, RouteResult};
use integration_routes::{GoogleRoutesClient, RoutesClient, RoutesConfig, RoutesError};
use tracing::instrument;

/// Adapter for the Google Routes API
pub struct RoutesAdapter {
    client: Box<dyn RoutesClient>,
}

impl fmt::Debug for RoutesAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoutesAdapter").finish_non_exhaustive()
    }
}

impl RoutesAdapter {
    /// Wrap an existing routes client
    pub fn new(client: impl RoutesClient + 'static) -> Self {
        Self {
            client: Box::new(client),
        }
    }

    /// Build the adapter from client configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn from_config(config: &RoutesConfig) -> Result<Self, ApplicationError> {
        let client = GoogleRoutesClient::new(config).map_err(map_routes_error)?;
        Ok(Self::new(client))
    }
}

#[async_trait]
impl RoutesPort for RoutesAdapter {
    #[instrument(skip(self, request))]
    async fn compute_route(&self, request: &RouteRequest) -> Result<RouteResult, ApplicationError> {
        self.client
            .compute_route(request)
            .await
            .map_err(map_routes_error)
    }
}

/// Map integration errors onto the application error kinds
pub(crate) fn map_routes_error(err: RoutesError) -> ApplicationError {
    match err {
        RoutesError::RequestFailed { status_code } => {
            ApplicationError::RequestFailed { status_code }
        },
        RoutesError::TransportError { message } => ApplicationError::TransportError { message },
        RoutesError::NoRouteFound => ApplicationError::NoRouteFound,
        RoutesError::InvalidResponse(message) => ApplicationError::InvalidResponse { message },
        RoutesError::ConfigurationError(message) => ApplicationError::Configuration(message),
    }
}
