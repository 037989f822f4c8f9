//! Google Maps Platform service configuration
//!
//! Per-service settings without credentials. The shared API key lives in
//! [`super::GoogleConfig`] and is attached when converting to the client
//! configs of `integration_routes`.

use integration_routes::{GeocodingConfig, RoutesConfig, TimezoneConfig};
use serde::{Deserialize, Serialize};

/// Routes API settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutesAppConfig {
    /// Base URL (default: https://routes.googleapis.com)
    pub base_url: String,
    /// Request timeout in seconds (default: 10)
    pub timeout_secs: u64,
}

impl Default for RoutesAppConfig {
    fn default() -> Self {
        let defaults = RoutesConfig::default();
        Self {
            base_url: defaults.base_url,
            timeout_secs: defaults.timeout_secs,
        }
    }
}

impl RoutesAppConfig {
    /// Convert to `integration_routes::RoutesConfig`
    #[must_use]
    pub fn to_routes_config(&self, api_key: &str) -> RoutesConfig {
        RoutesConfig {
            base_url: self.base_url.clone(),
            api_key: api_key.to_string(),
            timeout_secs: self.timeout_secs,
        }
    }
}

/// Geocoding API settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeocodingAppConfig {
    /// Base URL (default: https://maps.googleapis.com/maps/api)
    pub base_url: String,
    /// Request timeout in seconds (default: 5)
    pub timeout_secs: u64,
    /// Cache TTL in hours, 0 disables caching (default: 24)
    pub cache_ttl_hours: u64,
    /// ISO 3166-1 alpha-2 country restriction (e.g. "KE")
    pub default_country: Option<String>,
}

impl Default for GeocodingAppConfig {
    fn default() -> Self {
        let defaults = GeocodingConfig::default();
        Self {
            base_url: defaults.base_url,
            timeout_secs: defaults.timeout_secs,
            cache_ttl_hours: defaults.cache_ttl_hours,
            default_country: defaults.default_country,
        }
    }
}

impl GeocodingAppConfig {
    /// Convert to `integration_routes::GeocodingConfig`
    #[must_use]
    pub fn to_geocoding_config(&self, api_key: &str) -> GeocodingConfig {
        GeocodingConfig {
            base_url: self.base_url.clone(),
            api_key: api_key.to_string(),
            timeout_secs: self.timeout_secs,
            cache_ttl_hours: self.cache_ttl_hours,
            default_country: self.default_country.clone(),
        }
    }
}

/// Time Zone API settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimezoneAppConfig {
    /// Base URL (default: https://maps.googleapis.com/maps/api)
    pub base_url: String,
    /// Request timeout in seconds (default: 5)
    pub timeout_secs: u64,
}

impl Default for TimezoneAppConfig {
    fn default() -> Self {
        let defaults = TimezoneConfig::default();
        Self {
            base_url: defaults.base_url,
            timeout_secs: defaults.timeout_secs,
        }
    }
}

impl TimezoneAppConfig {
    /// Convert to `integration_routes::TimezoneConfig`
    #[must_use]
    pub fn to_timezone_config(&self, api_key: &str) -> TimezoneConfig {
        TimezoneConfig {
            base_url: self.base_url.clone(),
            api_key: api_key.to_string(),
            timeout_secs: self.timeout_secs,
        }
    }
}
