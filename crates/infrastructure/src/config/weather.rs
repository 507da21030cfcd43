//! Weather provider configuration.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// OpenWeatherMap configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct WeatherAppConfig {
    /// Provider API key (sensitive - uses `SecretString`)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Data API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Geocoding API base URL
    #[serde(default = "default_geo_base_url")]
    pub geo_base_url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Maximum geocoding matches (default: 5)
    #[serde(default = "default_geo_limit")]
    pub geo_limit: u8,
}

impl std::fmt::Debug for WeatherAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAppConfig")
            .field(
                "api_key",
                &if self.api_key.is_some() {
                    Some("[REDACTED]")
                } else {
                    None
                },
            )
            .field("base_url", &self.base_url)
            .field("geo_base_url", &self.geo_base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("geo_limit", &self.geo_limit)
            .finish()
    }
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_geo_base_url() -> String {
    "https://api.openweathermap.org/geo/1.0".to_string()
}

const fn default_timeout() -> u64 {
    30
}

const fn default_geo_limit() -> u8 {
    5
}

impl Default for WeatherAppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            geo_base_url: default_geo_base_url(),
            timeout_secs: default_timeout(),
            geo_limit: default_geo_limit(),
        }
    }
}

impl WeatherAppConfig {
    /// Whether a non-blank API key is present
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.api_key_str().is_some_and(|key| !key.trim().is_empty())
    }

    /// Get the API key as a string reference
    #[must_use]
    pub fn api_key_str(&self) -> Option<&str> {
        self.api_key.as_ref().map(ExposeSecret::expose_secret)
    }

    /// Convert to `integration_weather`'s `WeatherConfig`
    #[must_use]
    pub fn to_client_config(&self) -> integration_weather::WeatherConfig {
        integration_weather::WeatherConfig {
            base_url: self.base_url.trim_end_matches('/').to_string(),
            geo_base_url: self.geo_base_url.trim_end_matches('/').to_string(),
            timeout_secs: self.timeout_secs,
            geo_limit: self.geo_limit,
        }
    }
}
