//! Proxy service - relays raw provider responses
//!
//! Validation happens in a fixed order: credential, then query, then
//! endpoint selector. Only a fully valid request reaches the provider.

use std::{fmt, sync::Arc};

use domain::value_objects::{CityQuery, ProxyEndpoint};
use tracing::{debug, error, instrument, warn};

use crate::{error::ApplicationError, ports::WeatherPort};

/// Message returned when no provider credential is configured
pub const API_KEY_MISSING: &str = "Server configuration error: API Key missing";

/// Service relaying `weather`, `forecast` and `geo` queries upstream
pub struct ProxyService {
    weather: Arc<dyn WeatherPort>,
}

impl fmt::Debug for ProxyService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxyService")
            .field("configured", &self.weather.is_configured())
            .finish_non_exhaustive()
    }
}

impl ProxyService {
    /// Create a new proxy service
    pub fn new(weather: Arc<dyn WeatherPort>) -> Self {
        Self { weather }
    }

    /// Relay a request given the raw `endpoint` and `q` parameters
    #[instrument(skip(self))]
    pub async fn relay(
        &self,
        endpoint: Option<&str>,
        query: Option<&str>,
    ) -> Result<serde_json::Value, ApplicationError> {
        if !self.weather.is_configured() {
            return Err(ApplicationError::Configuration(API_KEY_MISSING.to_string()));
        }

        let query = CityQuery::from_param(query)?;
        let endpoint: ProxyEndpoint = endpoint.unwrap_or_default().parse()?;

        debug!(%endpoint, query = %query, "Relaying request upstream");

        self.weather
            .relay(endpoint, &query)
            .await
            .inspect_err(|e| match e {
                ApplicationError::Upstream { status, message } => {
                    warn!(%endpoint, status, message = %message, "Upstream returned an error");
                },
                other => error!(%endpoint, error = %other, "Weather API proxy error"),
            })
    }
}
