//! Weather adapter - Implements WeatherPort using integration_weather

use application::error::ApplicationError;
use application::ports::WeatherPort;
use async_trait::async_trait;
use domain::{
    CitySearchResult, CurrentConditions, ForecastPayload,
    value_objects::{CityQuery, ProxyEndpoint},
};
use integration_weather::{OpenWeatherClient, WeatherClient, WeatherError};
use tracing::{debug, instrument};

use crate::config::WeatherAppConfig;

/// Adapter for the OpenWeatherMap API
pub struct WeatherAdapter {
    client: OpenWeatherClient,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("client", &"OpenWeatherClient")
            .field("configured", &self.client.is_configured())
            .finish()
    }
}

impl WeatherAdapter {
    /// Create an adapter from application configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: &WeatherAppConfig) -> Result<Self, ApplicationError> {
        let client = OpenWeatherClient::new(config.to_client_config(), config.api_key.clone())
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::Upstream { status, message } => {
                ApplicationError::Upstream { status, message }
            },
            WeatherError::ConnectionFailed(e) | WeatherError::RequestFailed(e) => {
                ApplicationError::ExternalService(e)
            },
            WeatherError::ParseError(e) => ApplicationError::Internal(e),
            WeatherError::MissingApiKey => {
                ApplicationError::Configuration(application::API_KEY_MISSING.to_string())
            },
        }
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    fn is_configured(&self) -> bool {
        self.client.is_configured()
    }

    #[instrument(skip(self), fields(city = %city))]
    async fn current_weather(
        &self,
        city: &CityQuery,
    ) -> Result<CurrentConditions, ApplicationError> {
        let result = self.client.get_current(city).await.map_err(Self::map_error);

        match &result {
            Ok(current) => {
                debug!(
                    temperature = current.temperature,
                    category = %current.category(),
                    "Retrieved current weather"
                );
            },
            Err(e) => {
                debug!(error = %e, "Failed to get current weather");
            },
        }

        result
    }

    #[instrument(skip(self), fields(city = %city))]
    async fn forecast(&self, city: &CityQuery) -> Result<ForecastPayload, ApplicationError> {
        let result = self.client.get_forecast(city).await.map_err(Self::map_error);

        match &result {
            Ok(forecast) => {
                debug!(samples = forecast.samples.len(), "Retrieved weather forecast");
            },
            Err(e) => {
                debug!(error = %e, "Failed to get weather forecast");
            },
        }

        result
    }

    #[instrument(skip(self), fields(query = %query))]
    async fn search_cities(
        &self,
        query: &CityQuery,
    ) -> Result<Vec<CitySearchResult>, ApplicationError> {
        self.client
            .search_cities(query)
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self), fields(query = %query))]
    async fn relay(
        &self,
        endpoint: ProxyEndpoint,
        query: &CityQuery,
    ) -> Result<serde_json::Value, ApplicationError> {
        self.client
            .relay(endpoint, query)
            .await
            .map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adapter(api_key: Option<&str>) -> WeatherAdapter {
        let config = WeatherAppConfig {
            api_key: api_key.map(|key| key.to_string().into()),
            ..Default::default()
        };
        WeatherAdapter::new(&config).unwrap()
    }

    #[test]
    fn new_reports_configuration() {
        assert!(adapter(Some("key")).is_configured());
        assert!(!adapter(None).is_configured());
    }

    #[test]
    fn debug_impl() {
        let debug_str = format!("{:?}", adapter(Some("secret-key")));
        assert!(debug_str.contains("WeatherAdapter"));
        assert!(!debug_str.contains("secret-key"));
    }

    #[test]
    fn map_error_upstream_keeps_status() {
        let err = WeatherError::Upstream {
            status: 401,
            message: "Invalid API key".into(),
        };
        let app_err = WeatherAdapter::map_error(err);
        assert!(matches!(
            app_err,
            ApplicationError::Upstream { status: 401, ref message } if message == "Invalid API key"
        ));
    }

    #[test]
    fn map_error_request_failed() {
        let err = WeatherError::RequestFailed("timeout".into());
        let app_err = WeatherAdapter::map_error(err);
        assert!(matches!(app_err, ApplicationError::ExternalService(_)));
    }

    #[test]
    fn map_error_parse() {
        let err = WeatherError::ParseError("eof".into());
        let app_err = WeatherAdapter::map_error(err);
        assert!(matches!(app_err, ApplicationError::Internal(_)));
    }

    #[test]
    fn map_error_missing_key() {
        let app_err = WeatherAdapter::map_error(WeatherError::MissingApiKey);
        assert_eq!(app_err.to_string(), application::API_KEY_MISSING);
    }

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WeatherAdapter>();
    }
}
