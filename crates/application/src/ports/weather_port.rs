//! Weather service port
//!
//! Defines the interface for talking to the upstream weather provider.

use async_trait::async_trait;
use domain::{
    CitySearchResult, CurrentConditions, ForecastPayload,
    value_objects::{CityQuery, ProxyEndpoint},
};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather provider operations
#[allow(clippy::struct_field_names)] // automock generates struct with prefixes
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Whether a provider credential is available
    fn is_configured(&self) -> bool;

    /// Current conditions for a city
    async fn current_weather(
        &self,
        city: &CityQuery,
    ) -> Result<CurrentConditions, ApplicationError>;

    /// 5-day / 3-hour forecast for a city
    async fn forecast(&self, city: &CityQuery) -> Result<ForecastPayload, ApplicationError>;

    /// Geocoding matches for an autocomplete query
    async fn search_cities(
        &self,
        query: &CityQuery,
    ) -> Result<Vec<CitySearchResult>, ApplicationError>;

    /// Forward a query upstream and return the provider's JSON untouched
    async fn relay(
        &self,
        endpoint: ProxyEndpoint,
        query: &CityQuery,
    ) -> Result<serde_json::Value, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn WeatherPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn WeatherPort>();
    }
}
