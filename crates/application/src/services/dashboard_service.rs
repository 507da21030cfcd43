//! Dashboard service - current conditions plus normalized forecast
//!
//! Fetches current weather and the 3-hour forecast concurrently, then runs
//! the forecast through the daily and hourly normalizers.

use std::{fmt, sync::Arc};

use domain::{
    CitySearchResult, CurrentConditions, DailySummary, ForecastLocation, HourlySample,
    interpolate_hourly, summarize_daily,
    value_objects::CityQuery,
};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{error::ApplicationError, ports::WeatherPort, services::API_KEY_MISSING};

/// Everything the dashboard renders for one city
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherDashboard {
    pub location: ForecastLocation,
    pub current: CurrentConditions,
    /// At most five days, first entry is today
    pub daily: Vec<DailySummary>,
    /// Up to 24 hourly entries starting at the first forecast sample
    pub hourly: Vec<HourlySample>,
}

/// Service assembling dashboards and answering city autocomplete
pub struct DashboardService {
    weather: Arc<dyn WeatherPort>,
}

impl fmt::Debug for DashboardService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DashboardService")
            .field("configured", &self.weather.is_configured())
            .finish_non_exhaustive()
    }
}

impl DashboardService {
    /// Create a new dashboard service
    pub fn new(weather: Arc<dyn WeatherPort>) -> Self {
        Self { weather }
    }

    /// Whether the upstream credential is available
    pub fn is_ready(&self) -> bool {
        self.weather.is_configured()
    }

    /// Build the dashboard for `city`
    #[instrument(skip(self), fields(city = %city))]
    pub async fn dashboard(&self, city: &CityQuery) -> Result<WeatherDashboard, ApplicationError> {
        if !self.weather.is_configured() {
            return Err(ApplicationError::Configuration(API_KEY_MISSING.to_string()));
        }

        let (current, forecast) = tokio::try_join!(
            self.weather.current_weather(city),
            self.weather.forecast(city),
        )?;

        let daily = summarize_daily(&forecast.samples);
        let hourly = interpolate_hourly(&forecast.samples);

        info!(
            location = %forecast.location.name,
            samples = forecast.samples.len(),
            days = daily.len(),
            hours = hourly.len(),
            "Dashboard assembled"
        );

        Ok(WeatherDashboard {
            location: forecast.location,
            current,
            daily,
            hourly,
        })
    }

    /// City suggestions for an autocomplete box
    ///
    /// Never fails: a missing credential, a query shorter than two
    /// characters and upstream errors all yield an empty list.
    #[instrument(skip(self))]
    pub async fn search_cities(&self, query: Option<&str>) -> Vec<CitySearchResult> {
        if !self.weather.is_configured() {
            debug!("City search skipped, no credential");
            return Vec::new();
        }

        let Ok(query) = CityQuery::from_param(query) else {
            return Vec::new();
        };
        if !query.is_searchable() {
            return Vec::new();
        }

        match self.weather.search_cities(&query).await {
            Ok(results) => results,
            Err(e) => {
                warn!(error = %e, query = %query, "City search failed");
                Vec::new()
            },
        }
    }
}
