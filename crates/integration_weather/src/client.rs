//! OpenWeatherMap client
//!
//! HTTP client for the OpenWeatherMap current weather, 5-day forecast and
//! direct geocoding APIs.

use std::{fmt, time::Duration};

use async_trait::async_trait;
use domain::{
    CitySearchResult, CurrentConditions, ForecastPayload,
    value_objects::{CityQuery, ProxyEndpoint},
};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::models::{CurrentWeatherResponse, ForecastResponse, GeoLocationResponse};

/// Message used when the provider reports a failure without one
pub const UPSTREAM_FALLBACK_MESSAGE: &str = "Upstream API error";

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The HTTP client could not be built
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The request never produced a response
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The provider answered with a non-success status
    #[error("Upstream error ({status}): {message}")]
    Upstream {
        /// HTTP status returned by the provider
        status: u16,
        /// Provider `message` field, or a generic fallback
        message: String,
    },

    /// Failed to parse response from the provider
    #[error("Parse error: {0}")]
    ParseError(String),

    /// No API key configured
    #[error("API key missing")]
    MissingApiKey,
}

/// Weather service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Data API base URL (default: <https://api.openweathermap.org/data/2.5>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Geocoding API base URL (default: <https://api.openweathermap.org/geo/1.0>)
    #[serde(default = "default_geo_base_url")]
    pub geo_base_url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Maximum geocoding matches (default: 5)
    #[serde(default = "default_geo_limit")]
    pub geo_limit: u8,
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

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            geo_base_url: default_geo_base_url(),
            timeout_secs: default_timeout(),
            geo_limit: default_geo_limit(),
        }
    }
}

/// Weather client trait for fetching weather data
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Whether an API key is available
    fn is_configured(&self) -> bool;

    /// Current conditions for a city, in metric units
    async fn get_current(&self, city: &CityQuery) -> Result<CurrentConditions, WeatherError>;

    /// 5-day / 3-hour forecast for a city, in metric units
    async fn get_forecast(&self, city: &CityQuery) -> Result<ForecastPayload, WeatherError>;

    /// Geocoding matches for a free-text query
    async fn search_cities(
        &self,
        query: &CityQuery,
    ) -> Result<Vec<CitySearchResult>, WeatherError>;

    /// Forward a query and return the provider's JSON body untouched
    async fn relay(
        &self,
        endpoint: ProxyEndpoint,
        query: &CityQuery,
    ) -> Result<serde_json::Value, WeatherError>;
}

/// OpenWeatherMap HTTP client implementation
pub struct OpenWeatherClient {
    client: Client,
    config: WeatherConfig,
    api_key: Option<SecretString>,
}

impl fmt::Debug for OpenWeatherClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenWeatherClient")
            .field("config", &self.config)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish_non_exhaustive()
    }
}

impl OpenWeatherClient {
    /// Create a new client
    ///
    /// A blank `api_key` counts as absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(
        config: WeatherConfig,
        api_key: Option<SecretString>,
    ) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        let api_key = api_key.filter(|key| !key.expose_secret().trim().is_empty());

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    fn api_key(&self) -> Result<&str, WeatherError> {
        self.api_key
            .as_ref()
            .map(ExposeSecret::expose_secret)
            .ok_or(WeatherError::MissingApiKey)
    }

    /// URL and query parameters for an endpoint, without the key
    fn request_for(
        &self,
        endpoint: ProxyEndpoint,
        query: &str,
    ) -> (String, Vec<(&'static str, String)>) {
        match endpoint {
            ProxyEndpoint::Weather | ProxyEndpoint::Forecast => (
                format!("{}/{}", self.config.base_url, endpoint.as_str()),
                vec![("q", query.to_string()), ("units", "metric".to_string())],
            ),
            ProxyEndpoint::Geo => (
                format!("{}/direct", self.config.geo_base_url),
                vec![
                    ("q", query.to_string()),
                    ("limit", self.config.geo_limit.to_string()),
                ],
            ),
        }
    }

    /// Send a GET and decode the JSON body
    ///
    /// Non-success statuses become [`WeatherError::Upstream`], carrying the
    /// provider's `message` when the error body has one.
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: ProxyEndpoint,
        query: &CityQuery,
    ) -> Result<T, WeatherError> {
        let api_key = self.api_key()?;
        let (url, params) = self.request_for(endpoint, query.as_str());

        debug!(url = %url, %endpoint, "Sending weather request");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .query(&[("appid", api_key)])
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        let status = response.status();
        debug!(status = %status, "Received weather response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = upstream_message(&body);
            warn!(status = status.as_u16(), message = %message, "Weather provider returned an error");
            return Err(WeatherError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))
    }
}

/// Extract the provider's `message`, falling back to a generic text
fn upstream_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(serde_json::Value::as_str)
                .filter(|message| !message.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| UPSTREAM_FALLBACK_MESSAGE.to_string())
}

#[async_trait]
impl WeatherClient for OpenWeatherClient {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    #[instrument(skip(self), fields(city = %city))]
    async fn get_current(&self, city: &CityQuery) -> Result<CurrentConditions, WeatherError> {
        let response: CurrentWeatherResponse = self.get_json(ProxyEndpoint::Weather, city).await?;
        Ok(response.into_domain())
    }

    #[instrument(skip(self), fields(city = %city))]
    async fn get_forecast(&self, city: &CityQuery) -> Result<ForecastPayload, WeatherError> {
        let response: ForecastResponse = self.get_json(ProxyEndpoint::Forecast, city).await?;
        let payload = response.into_domain();
        debug!(samples = payload.samples.len(), "Parsed forecast");
        Ok(payload)
    }

    #[instrument(skip(self), fields(query = %query))]
    async fn search_cities(
        &self,
        query: &CityQuery,
    ) -> Result<Vec<CitySearchResult>, WeatherError> {
        let response: Vec<GeoLocationResponse> = self.get_json(ProxyEndpoint::Geo, query).await?;
        Ok(response
            .into_iter()
            .map(GeoLocationResponse::into_domain)
            .collect())
    }

    #[instrument(skip(self), fields(query = %query))]
    async fn relay(
        &self,
        endpoint: ProxyEndpoint,
        query: &CityQuery,
    ) -> Result<serde_json::Value, WeatherError> {
        self.get_json(endpoint, query).await
    }
}
