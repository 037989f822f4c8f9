//! Google Geocoding client
//!
//! Converts free-form address strings to coordinates using the Google
//! Geocoding API. Results are cached in-process to avoid re-resolving
//! the same address while a form is being edited.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use domain::{CountryCode, GeoPoint, ResolvedPlace};
use moka::future::Cache;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument, warn};

/// Configuration for the Google Geocoding service
#[derive(Clone, Serialize, Deserialize)]
pub struct GeocodingConfig {
    /// Base URL for the Maps web service APIs
    #[serde(default = "default_geocoding_base_url")]
    pub base_url: String,

    /// Google Maps Platform API key
    #[serde(default, skip_serializing)]
    pub api_key: String,

    /// Request timeout in seconds
    #[serde(default = "default_geocoding_timeout_secs")]
    pub timeout_secs: u64,

    /// Cache TTL in hours (0 to disable)
    #[serde(default = "default_cache_ttl_hours")]
    pub cache_ttl_hours: u64,

    /// Country restriction applied when the caller does not pass one
    #[serde(default)]
    pub default_country: Option<String>,
}

fn default_geocoding_base_url() -> String {
    "https://maps.googleapis.com/maps/api".to_string()
}

const fn default_geocoding_timeout_secs() -> u64 {
    5
}

const fn default_cache_ttl_hours() -> u64 {
    24
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            base_url: default_geocoding_base_url(),
            api_key: String::new(),
            timeout_secs: default_geocoding_timeout_secs(),
            cache_ttl_hours: default_cache_ttl_hours(),
            default_country: None,
        }
    }
}

impl fmt::Debug for GeocodingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeocodingConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .field("cache_ttl_hours", &self.cache_ttl_hours)
            .field("default_country", &self.default_country)
            .finish()
    }
}

impl GeocodingConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            api_key: "test-api-key".to_string(),
            timeout_secs: 5,
            cache_ttl_hours: 0,
            ..Default::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.trim().is_empty() {
            return Err("geocoding base_url must not be empty".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("geocoding timeout_secs must be greater than 0".to_string());
        }
        if let Some(country) = &self.default_country {
            CountryCode::parse(country).map_err(|e| e.to_string())?;
        }
        Ok(())
    }
}

/// Errors that can occur during geocoding
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// Connection to geocoding service failed
    #[error("Geocoding connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to geocoding service failed
    #[error("Geocoding request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse geocoding response
    #[error("Geocoding parse error: {0}")]
    ParseError(String),

    /// Address could not be resolved to coordinates
    #[error("Address not found: {0}")]
    AddressNotFound(String),

    /// Request timeout
    #[error("Geocoding request timed out")]
    Timeout,

    /// Client configuration is invalid
    #[error("Geocoding configuration error: {0}")]
    ConfigurationError(String),
}

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Resolve a free-form address, optionally restricted to one country
    async fn geocode(
        &self,
        address: &str,
        country: Option<&CountryCode>,
    ) -> Result<ResolvedPlace, GeocodingError>;
}

/// Google Geocoding client with result caching
#[derive(Debug)]
pub struct GoogleGeocodingClient {
    client: Client,
    config: GeocodingConfig,
    default_country: Option<CountryCode>,
    cache: Option<Cache<String, ResolvedPlace>>,
}

impl GoogleGeocodingClient {
    /// Create a new Google Geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &GeocodingConfig) -> Result<Self, GeocodingError> {
        config.validate().map_err(GeocodingError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        let default_country = config
            .default_country
            .as_deref()
            .map(CountryCode::parse)
            .transpose()
            .map_err(|e| GeocodingError::ConfigurationError(e.to_string()))?;

        // A TTL of 0 disables caching
        let cache = (config.cache_ttl_hours > 0).then(|| {
            let ttl = Duration::from_secs(config.cache_ttl_hours.saturating_mul(3600));
            Cache::builder().max_capacity(1000).time_to_live(ttl).build()
        });

        Ok(Self {
            client,
            config: config.clone(),
            default_country,
            cache,
        })
    }

    fn cache_key(address: &str, country: Option<&CountryCode>) -> String {
        format!(
            "{}|{}",
            country.map_or("", CountryCode::as_str),
            address.to_lowercase()
        )
    }

    /// Select the first result of a Geocoding response
    fn parse_response(address: &str, body: &str) -> Result<ResolvedPlace, GeocodingError> {
        let raw: RawGeocodeResponse =
            serde_json::from_str(body).map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        match raw.status.as_str() {
            "OK" => {},
            "ZERO_RESULTS" => return Err(GeocodingError::AddressNotFound(address.to_string())),
            other => {
                let detail = raw
                    .error_message
                    .map_or_else(|| other.to_string(), |m| format!("{other}: {m}"));
                return Err(GeocodingError::RequestFailed(detail));
            },
        }

        let result = raw
            .results
            .into_iter()
            .next()
            .ok_or_else(|| GeocodingError::AddressNotFound(address.to_string()))?;

        let location = result.geometry.location;
        let point = GeoPoint::new(location.lat, location.lng)
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        Ok(ResolvedPlace::new(point, result.formatted_address))
    }
}

#[async_trait]
impl GeocodingClient for GoogleGeocodingClient {
    #[instrument(skip(self))]
    async fn geocode(
        &self,
        address: &str,
        country: Option<&CountryCode>,
    ) -> Result<ResolvedPlace, GeocodingError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(GeocodingError::AddressNotFound(
                "Address must not be empty".to_string(),
            ));
        }

        let country = country.or(self.default_country.as_ref());

        // Check cache first
        let cache_key = Self::cache_key(address, country);
        let cached = match &self.cache {
            Some(cache) => cache.get(&cache_key).await,
            None => None,
        };
        if let Some(place) = cached {
            debug!(%address, "Geocoding cache hit");
            return Ok(place);
        }

        let url = format!(
            "{}/geocode/json",
            self.config.base_url.trim_end_matches('/')
        );
        let mut params = vec![("address", address.to_string())];
        if let Some(code) = country {
            params.push(("components", format!("country:{}", code.as_str())));
        }
        params.push(("key", self.config.api_key.clone()));

        debug!(%address, ?country, "Geocoding address");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeocodingError::Timeout
                } else {
                    GeocodingError::ConnectionFailed(e.without_url().to_string())
                }
            })?;

        if !response.status().is_success() {
            warn!(status = %response.status(), "Geocoding request rejected");
            return Err(GeocodingError::RequestFailed(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| GeocodingError::ParseError(e.without_url().to_string()))?;

        let place = Self::parse_response(address, &body)?;

        if let Some(cache) = &self.cache {
            cache.insert(cache_key, place.clone()).await;
        }
        debug!(%address, location = %place.location, "Geocoded address");

        Ok(place)
    }
}

// --- Raw API response types for deserialization ---

#[derive(Debug, Deserialize)]
struct RawGeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<RawGeocodeResult>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawGeocodeResult {
    #[serde(default)]
    formatted_address: String,
    geometry: RawGeometry,
}

#[derive(Debug, Deserialize)]
struct RawGeometry {
    location: RawLatLng,
}

#[derive(Debug, Deserialize)]
struct RawLatLng {
    lat: f64,
    lng: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAIROBI_JSON: &str = r#"{
        "status": "OK",
        "results": [{
            "formatted_address": "Nairobi, Kenya",
            "geometry": { "location": { "lat": -1.2920659, "lng": 36.8219462 } }
        }]
    }"#;

    #[test]
    fn test_geocoding_config_default() {
        let config = GeocodingConfig::default();
        assert_eq!(config.base_url, "https://maps.googleapis.com/maps/api");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.cache_ttl_hours, 24);
        assert!(config.default_country.is_none());
    }

    #[test]
    fn test_validate_rejects_bad_country() {
        let config = GeocodingConfig {
            default_country: Some("KEN".to_string()),
            ..GeocodingConfig::for_testing()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_ok_response() {
        let place = GoogleGeocodingClient::parse_response("Nairobi", NAIROBI_JSON).unwrap();
        assert_eq!(place.formatted_address, "Nairobi, Kenya");
        assert!((place.location.latitude() - -1.292_065_9).abs() < 1e-9);
        assert!((place.location.longitude() - 36.821_946_2).abs() < 1e-9);
    }

    #[test]
    fn test_parse_zero_results() {
        let body = r#"{ "status": "ZERO_RESULTS", "results": [] }"#;
        let result = GoogleGeocodingClient::parse_response("nowhere", body);
        assert!(matches!(result, Err(GeocodingError::AddressNotFound(a)) if a == "nowhere"));
    }

    #[test]
    fn test_parse_request_denied() {
        let body = r#"{ "status": "REQUEST_DENIED", "error_message": "bad key", "results": [] }"#;
        let result = GoogleGeocodingClient::parse_response("x", body);
        assert!(matches!(result, Err(GeocodingError::RequestFailed(m)) if m.contains("bad key")));
    }

    #[test]
    fn test_cache_key_includes_country() {
        let ke = CountryCode::parse("ke").unwrap();
        assert_ne!(
            GoogleGeocodingClient::cache_key("Main St", Some(&ke)),
            GoogleGeocodingClient::cache_key("Main St", None)
        );
        assert_eq!(
            GoogleGeocodingClient::cache_key("Main St", None),
            GoogleGeocodingClient::cache_key("MAIN ST", None)
        );
    }
}
