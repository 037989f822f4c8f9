//! Google Time Zone client
//!
//! Resolves the IANA timezone of a coordinate at a given instant.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::{GeoPoint, Timezone};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

/// Configuration for the Google Time Zone service
#[derive(Clone, Serialize, Deserialize)]
pub struct TimezoneConfig {
    /// Base URL for the Maps web service APIs
    #[serde(default = "default_timezone_base_url")]
    pub base_url: String,

    /// Google Maps Platform API key
    #[serde(default, skip_serializing)]
    pub api_key: String,

    /// Request timeout in seconds
    #[serde(default = "default_timezone_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timezone_base_url() -> String {
    "https://maps.googleapis.com/maps/api".to_string()
}

const fn default_timezone_timeout_secs() -> u64 {
    5
}

impl Default for TimezoneConfig {
    fn default() -> Self {
        Self {
            base_url: default_timezone_base_url(),
            api_key: String::new(),
            timeout_secs: default_timezone_timeout_secs(),
        }
    }
}

impl fmt::Debug for TimezoneConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimezoneConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl TimezoneConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            api_key: "test-api-key".to_string(),
            ..Default::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.trim().is_empty() {
            return Err("timezone base_url must not be empty".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("timezone timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}

/// Errors that can occur during a timezone lookup
#[derive(Debug, Error)]
pub enum TimezoneError {
    /// Connection to the service failed
    #[error("Timezone connection failed: {0}")]
    ConnectionFailed(String),

    /// The service answered with a non-success HTTP status
    #[error("Timezone request failed: {0}")]
    RequestFailed(String),

    /// The service answered with a status other than `OK`
    #[error("Timezone lookup returned status {status}")]
    LookupFailed {
        /// API status string, e.g. `ZERO_RESULTS`
        status: String,
    },

    /// Failed to parse the response
    #[error("Timezone parse error: {0}")]
    ParseError(String),

    /// Request timeout
    #[error("Timezone request timed out")]
    Timeout,

    /// Client configuration is invalid
    #[error("Timezone configuration error: {0}")]
    ConfigurationError(String),
}

/// Trait for timezone lookup clients
#[async_trait]
pub trait TimezoneClient: Send + Sync {
    /// Look up the timezone in effect at `point` at `timestamp`
    async fn lookup(
        &self,
        point: &GeoPoint,
        timestamp: DateTime<Utc>,
    ) -> Result<Timezone, TimezoneError>;
}

/// Google Time Zone API client
#[derive(Debug)]
pub struct GoogleTimezoneClient {
    client: Client,
    config: TimezoneConfig,
}

impl GoogleTimezoneClient {
    /// Create a new Time Zone API client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &TimezoneConfig) -> Result<Self, TimezoneError> {
        config.validate().map_err(TimezoneError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TimezoneError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    fn parse_response(body: &str) -> Result<Timezone, TimezoneError> {
        let raw: RawTimezoneResponse =
            serde_json::from_str(body).map_err(|e| TimezoneError::ParseError(e.to_string()))?;

        if raw.status != "OK" {
            return Err(TimezoneError::LookupFailed { status: raw.status });
        }

        let id = raw
            .time_zone_id
            .ok_or_else(|| TimezoneError::ParseError("missing timeZoneId".to_string()))?;

        Timezone::parse(&id).map_err(|e| TimezoneError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl TimezoneClient for GoogleTimezoneClient {
    #[instrument(skip(self), fields(point = %point))]
    async fn lookup(
        &self,
        point: &GeoPoint,
        timestamp: DateTime<Utc>,
    ) -> Result<Timezone, TimezoneError> {
        let url = format!(
            "{}/timezone/json",
            self.config.base_url.trim_end_matches('/')
        );
        let params = [
            ("location", point.to_query_value()),
            ("timestamp", timestamp.timestamp().to_string()),
            ("key", self.config.api_key.clone()),
        ];

        debug!(?url, "Looking up timezone");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TimezoneError::Timeout
                } else {
                    TimezoneError::ConnectionFailed(e.without_url().to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(TimezoneError::RequestFailed(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| TimezoneError::ParseError(e.without_url().to_string()))?;

        let timezone = Self::parse_response(&body)?;
        debug!(timezone = %timezone.as_str(), "Timezone resolved");
        Ok(timezone)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTimezoneResponse {
    status: String,
    time_zone_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timezone_config_default() {
        let config = TimezoneConfig::default();
        assert_eq!(config.base_url, "https://maps.googleapis.com/maps/api");
        assert_eq!(config.timeout_secs, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_ok() {
        let body = r#"{
            "dstOffset": 0,
            "rawOffset": 10800,
            "status": "OK",
            "timeZoneId": "Africa/Nairobi",
            "timeZoneName": "East Africa Time"
        }"#;
        let tz = GoogleTimezoneClient::parse_response(body).unwrap();
        assert_eq!(tz.as_str(), "Africa/Nairobi");
    }

    #[test]
    fn test_parse_zero_results() {
        let body = r#"{ "status": "ZERO_RESULTS" }"#;
        let result = GoogleTimezoneClient::parse_response(body);
        assert!(
            matches!(result, Err(TimezoneError::LookupFailed { status }) if status == "ZERO_RESULTS")
        );
    }

    #[test]
    fn test_parse_unknown_zone() {
        let body = r#"{ "status": "OK", "timeZoneId": "Mars/Olympus_Mons" }"#;
        assert!(matches!(
            GoogleTimezoneClient::parse_response(body),
            Err(TimezoneError::ParseError(_))
        ));
    }
}
