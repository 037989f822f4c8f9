//! Application configuration
//!
//! Layered with the `config` crate: built-in defaults, then an optional
//! `config.toml`, then environment variables such as
//! `TRAFFIC_PLANNER_GOOGLE__API_KEY` or `TRAFFIC_PLANNER_ROUTES__TIMEOUT_SECS`.
//!
//! Split into focused sub-modules:
//! - `integrations`: Routes, Geocoding and Time Zone service settings

mod integrations;

use std::collections::HashMap;
use std::fmt;

use integration_routes::{GeocodingConfig, RoutesConfig, TimezoneConfig};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use integrations::{GeocodingAppConfig, RoutesAppConfig, TimezoneAppConfig};

pub use crate::telemetry::TelemetryConfig;

/// Prefix of configuration environment variables
pub const ENV_PREFIX: &str = "TRAFFIC_PLANNER";

/// Default configuration file name (extension resolved by the `config` crate)
pub const DEFAULT_CONFIG_FILE: &str = "config";

/// Credentials shared by all Google Maps Platform services
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct GoogleConfig {
    /// Maps Platform API key (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,
}

impl fmt::Debug for GoogleConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoogleConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Google credentials
    #[serde(default)]
    pub google: GoogleConfig,

    /// Routes API configuration
    #[serde(default)]
    pub routes: RoutesAppConfig,

    /// Geocoding API configuration
    #[serde(default)]
    pub geocoding: GeocodingAppConfig,

    /// Time Zone API configuration
    #[serde(default)]
    pub timezone: TimezoneAppConfig,

    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` (if present) and the environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(Some(DEFAULT_CONFIG_FILE), None)
    }

    /// Load configuration from an optional file and an environment snapshot
    ///
    /// `env` of `None` reads the process environment.
    pub fn load_from(
        file: Option<&str>,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        if let Some(path) = file {
            builder = builder.add_source(config::File::with_name(path).required(false));
        }

        let config = builder
            // Override with environment variables (e.g., TRAFFIC_PLANNER_ROUTES__TIMEOUT_SECS)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()?;

        let config: Self = config.try_deserialize()?;
        debug!(?config, "Configuration loaded");
        Ok(config)
    }

    /// The configured API key, if any
    pub fn api_key(&self) -> Option<&str> {
        self.google
            .api_key
            .as_ref()
            .map(|key| key.expose_secret())
            .filter(|key| !key.trim().is_empty())
    }

    fn require_api_key(&self) -> Result<&str, String> {
        self.api_key().ok_or_else(|| {
            format!("google.api_key is not set (export {ENV_PREFIX}_GOOGLE__API_KEY)")
        })
    }

    /// Routes client configuration with the API key attached
    pub fn routes_config(&self) -> Result<RoutesConfig, String> {
        Ok(self.routes.to_routes_config(self.require_api_key()?))
    }

    /// Geocoding client configuration with the API key attached
    pub fn geocoding_config(&self) -> Result<GeocodingConfig, String> {
        Ok(self.geocoding.to_geocoding_config(self.require_api_key()?))
    }

    /// Time Zone client configuration with the API key attached
    pub fn timezone_config(&self) -> Result<TimezoneConfig, String> {
        Ok(self.timezone.to_timezone_config(self.require_api_key()?))
    }

    /// Check structural validity; the API key is only required by the
    /// `*_config` accessors
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        let services = [
            ("routes", &self.routes.base_url, self.routes.timeout_secs),
            (
                "geocoding",
                &self.geocoding.base_url,
                self.geocoding.timeout_secs,
            ),
            (
                "timezone",
                &self.timezone.base_url,
                self.timezone.timeout_secs,
            ),
        ];
        for (name, base_url, timeout_secs) in services {
            if base_url.trim().is_empty() {
                errors.push(format!("{name}.base_url must not be empty"));
            }
            if timeout_secs == 0 {
                errors.push(format!("{name}.timeout_secs must be greater than 0"));
            }
        }

        if let Some(country) = &self.geocoding.default_country {
            if let Err(e) = domain::CountryCode::parse(country) {
                errors.push(format!("geocoding.default_country: {e}"));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> Option<HashMap<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        )
    }

    #[test]
    fn defaults_without_sources() {
        let config = AppConfig::load_from(None, env(&[])).unwrap();
        assert_eq!(config.routes.base_url, "https://routes.googleapis.com");
        assert_eq!(config.geocoding.cache_ttl_hours, 24);
        assert!(config.api_key().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn environment_overrides() {
        let config = AppConfig::load_from(
            None,
            env(&[
                ("TRAFFIC_PLANNER_GOOGLE__API_KEY", "from-env"),
                ("TRAFFIC_PLANNER_ROUTES__TIMEOUT_SECS", "3"),
                ("TRAFFIC_PLANNER_GEOCODING__DEFAULT_COUNTRY", "KE"),
            ]),
        )
        .unwrap();

        assert_eq!(config.api_key(), Some("from-env"));
        assert_eq!(config.routes.timeout_secs, 3);
        assert_eq!(config.geocoding.default_country.as_deref(), Some("KE"));
        assert_eq!(config.routes_config().unwrap().api_key, "from-env");
    }

    #[test]
    fn file_source_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("planner.toml");
        std::fs::write(
            &path,
            "[timezone]\nbase_url = \"http://localhost:9000\"\n\n[telemetry]\njson = true\n",
        )
        .unwrap();

        let file = path.with_extension("");
        let config = AppConfig::load_from(file.to_str(), env(&[])).unwrap();

        assert_eq!(config.timezone.base_url, "http://localhost:9000");
        assert!(config.telemetry.json);
    }

    #[test]
    fn missing_api_key_is_reported_by_accessors() {
        let config = AppConfig::default();
        let err = config.routes_config().unwrap_err();
        assert!(err.contains("TRAFFIC_PLANNER_GOOGLE__API_KEY"));
    }

    #[test]
    fn validate_collects_errors() {
        let mut config = AppConfig::default();
        config.routes.base_url = String::new();
        config.timezone.timeout_secs = 0;
        config.geocoding.default_country = Some("Kenya".to_string());

        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = AppConfig {
            google: GoogleConfig {
                api_key: Some(SecretString::from("super-secret".to_string())),
            },
            ..Default::default()
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}
