//! Routes service configuration

use std::fmt;

use serde::{Deserialize, Serialize};

/// Configuration for the Google Routes API client
#[derive(Clone, Serialize, Deserialize)]
pub struct RoutesConfig {
    /// Base URL for the Routes API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Google Maps Platform API key
    #[serde(default, skip_serializing)]
    pub api_key: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://routes.googleapis.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl fmt::Debug for RoutesConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoutesConfig")
            .field("base_url", &self.base_url)
            .field(
                "api_key",
                &if self.api_key.is_empty() {
                    None
                } else {
                    Some("[REDACTED]")
                },
            )
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl RoutesConfig {
    /// Create a configuration with the given API key and default endpoints
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            api_key: "test-api-key".to_string(),
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Full URL of the computeRoutes method
    #[must_use]
    pub fn compute_routes_url(&self) -> String {
        format!(
            "{}/directions/v2:computeRoutes",
            self.base_url.trim_end_matches('/')
        )
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.api_key.trim().is_empty() {
            return Err("api_key must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RoutesConfig::default();
        assert_eq!(config.base_url, "https://routes.googleapis.com");
        assert_eq!(config.timeout_secs, 10);
        assert!(config.api_key.is_empty());
    }

    #[test]
    fn test_compute_routes_url() {
        let config = RoutesConfig {
            base_url: "http://127.0.0.1:8080/".to_string(),
            ..RoutesConfig::for_testing()
        };
        assert_eq!(
            config.compute_routes_url(),
            "http://127.0.0.1:8080/directions/v2:computeRoutes"
        );
    }

    #[test]
    fn test_validation_success() {
        assert!(RoutesConfig::for_testing().validate().is_ok());
    }

    #[test]
    fn test_validation_missing_api_key() {
        assert!(RoutesConfig::default().validate().is_err());
    }

    #[test]
    fn test_validation_zero_timeout() {
        let config = RoutesConfig {
            timeout_secs: 0,
            ..RoutesConfig::for_testing()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = RoutesConfig::with_api_key("super-secret");
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_api_key_not_serialized() {
        let config = RoutesConfig::with_api_key("super-secret");
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("super-secret"));
        let deserialized: RoutesConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.base_url, config.base_url);
    }
}
