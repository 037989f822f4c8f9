//! Google Routes API client
//!
//! Issues a single traffic-aware `computeRoutes` call per request and
//! reduces the answer to the first route's distance, duration and
//! encoded polyline.

use std::time::Duration;

use async_trait::async_trait;
use domain::{RouteRequest, RouteResult};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode};
use tracing::{debug, instrument, warn};

use crate::config::RoutesConfig;
use crate::error::RoutesError;
use crate::models::{
    API_KEY_HEADER, ComputeRoutesRequest, FIELD_MASK, FIELD_MASK_HEADER, parse_first_route,
};

/// Trait for route computation clients
#[async_trait]
pub trait RoutesClient: Send + Sync {
    /// Compute a driving route for the given request
    async fn compute_route(&self, request: &RouteRequest) -> Result<RouteResult, RoutesError>;
}

/// Routes API client backed by reqwest
#[derive(Debug)]
pub struct GoogleRoutesClient {
    client: Client,
    config: RoutesConfig,
    headers: HeaderMap,
}

impl GoogleRoutesClient {
    /// Create a new Routes API client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &RoutesConfig) -> Result<Self, RoutesError> {
        config.validate().map_err(RoutesError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| RoutesError::ConfigurationError(e.to_string()))?;

        let headers = Self::request_headers(&config.api_key)?;

        Ok(Self {
            client,
            config: config.clone(),
            headers,
        })
    }

    /// Headers sent with every computeRoutes call
    fn request_headers(api_key: &str) -> Result<HeaderMap, RoutesError> {
        let mut key = HeaderValue::from_str(api_key).map_err(|_| {
            RoutesError::ConfigurationError("api_key contains invalid characters".to_string())
        })?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(API_KEY_HEADER, key);
        headers.insert(FIELD_MASK_HEADER, HeaderValue::from_static(FIELD_MASK));
        Ok(headers)
    }
}

#[async_trait]
impl RoutesClient for GoogleRoutesClient {
    #[instrument(skip(self, request), fields(origin = %request.origin(), destination = %request.destination()))]
    async fn compute_route(&self, request: &RouteRequest) -> Result<RouteResult, RoutesError> {
        let url = self.config.compute_routes_url();
        let payload = ComputeRoutesRequest::from(request);

        debug!(?url, departure = ?payload.departure_time, "Computing route");

        let response = self
            .client
            .post(&url)
            .headers(self.headers.clone())
            .json(&payload)
            .send()
            .await
            .map_err(|e| RoutesError::from_reqwest(&e, self.config.timeout_secs))?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(status = status.as_u16(), "Routes request rejected");
            return Err(RoutesError::RequestFailed {
                status_code: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| RoutesError::from_reqwest(&e, self.config.timeout_secs))?;

        let result = parse_first_route(&body)?;

        debug!(
            distance_meters = result.distance_meters,
            duration_seconds = result.duration_seconds,
            "Route computed"
        );
        Ok(result)
    }
}
