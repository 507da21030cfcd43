//! Dashboard and city search handlers
//!
//! These render the normalized forecast into display-ready values:
//! labels, rounded temperatures in the requested unit and categories.

use application::{API_KEY_MISSING, WeatherDashboard};
use axum::{
    Json,
    extract::{Query, State},
};
use chrono::{FixedOffset, NaiveDate, Utc};
use domain::{
    CitySearchResult, CurrentConditions, DailySummary, ForecastLocation, HourlySample,
    display::{daily_label, format_temperature, format_wind_speed, hourly_label, temperature_in},
    value_objects::{CityQuery, TemperatureUnit, WeatherCategory},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Query parameters of `GET /v1/dashboard`
#[derive(Debug, Default, Deserialize)]
pub struct DashboardParams {
    pub q: Option<String>,
    /// `c` (default) or `f`
    pub unit: Option<String>,
}

/// Query parameters of `GET /v1/cities`
#[derive(Debug, Default, Deserialize)]
pub struct CitySearchParams {
    pub q: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub location: LocationDto,
    pub unit: TemperatureUnit,
    pub current: CurrentDto,
    pub daily: Vec<DailyDto>,
    pub hourly: Vec<HourlyDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationDto {
    pub name: String,
    pub country: String,
    pub utc_offset_secs: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentDto {
    pub temperature: i32,
    pub temperature_display: String,
    pub feels_like: String,
    pub humidity: u8,
    pub pressure: u32,
    pub wind: String,
    pub description: String,
    pub icon: String,
    pub category: WeatherCategory,
    pub observed_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyDto {
    pub label: String,
    pub date: NaiveDate,
    pub temperature: i32,
    pub temperature_display: String,
    pub description: String,
    pub icon: String,
    pub category: WeatherCategory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlyDto {
    pub label: String,
    pub timestamp: i64,
    pub temperature: i32,
    pub temperature_display: String,
    pub humidity: u8,
    pub icon: String,
    pub interpolated: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityDto {
    pub name: String,
    pub display_name: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&ForecastLocation> for LocationDto {
    fn from(location: &ForecastLocation) -> Self {
        Self {
            name: location.name.clone(),
            country: location.country.clone(),
            utc_offset_secs: location.utc_offset_secs,
        }
    }
}

impl From<CitySearchResult> for CityDto {
    fn from(city: CitySearchResult) -> Self {
        Self {
            display_name: city.display_name(),
            name: city.name,
            country: city.country,
            state: city.state,
            latitude: city.latitude,
            longitude: city.longitude,
        }
    }
}

impl CurrentDto {
    fn render(current: &CurrentConditions, unit: TemperatureUnit) -> Self {
        Self {
            temperature: temperature_in(current.temperature, unit),
            temperature_display: format_temperature(current.temperature, unit),
            feels_like: format_temperature(current.feels_like, unit),
            humidity: current.humidity.value(),
            pressure: current.pressure,
            wind: format_wind_speed(current.wind_speed),
            description: current.description.clone(),
            icon: current.icon.clone(),
            category: current.category(),
            observed_at: current.observed_at,
        }
    }
}

impl DailyDto {
    fn render(
        index: usize,
        day: &DailySummary,
        utc_offset_secs: i32,
        unit: TemperatureUnit,
    ) -> Self {
        let sample = &day.sample;
        Self {
            label: daily_label(index, sample.timestamp, utc_offset_secs),
            date: day.date,
            temperature: temperature_in(sample.temperature, unit),
            temperature_display: format_temperature(sample.temperature, unit),
            description: sample.description.clone(),
            icon: sample.icon.clone(),
            category: sample.category(),
        }
    }
}

impl HourlyDto {
    fn render(hour: &HourlySample, label: String, unit: TemperatureUnit) -> Self {
        let sample = &hour.sample;
        Self {
            label,
            timestamp: sample.timestamp,
            temperature: temperature_in(sample.temperature, unit),
            temperature_display: format_temperature(sample.temperature, unit),
            humidity: sample.humidity.value(),
            icon: sample.icon.clone(),
            interpolated: hour.interpolated,
        }
    }
}

impl DashboardResponse {
    fn render(dashboard: &WeatherDashboard, unit: TemperatureUnit) -> Self {
        let offset = dashboard.location.utc_offset_secs;

        let daily = dashboard
            .daily
            .iter()
            .enumerate()
            .map(|(i, day)| DailyDto::render(i, day, offset, unit))
            .collect();

        let hourly = dashboard
            .hourly
            .iter()
            .enumerate()
            .map(|(i, hour)| {
                let label = FixedOffset::east_opt(offset).map_or_else(
                    || hourly_label(i, hour.sample.timestamp, &Utc),
                    |tz| hourly_label(i, hour.sample.timestamp, &tz),
                );
                HourlyDto::render(hour, label, unit)
            })
            .collect();

        Self {
            location: LocationDto::from(&dashboard.location),
            unit,
            current: CurrentDto::render(&dashboard.current, unit),
            daily,
            hourly,
        }
    }
}

/// `GET /v1/dashboard?q=<city>&unit=<c|f>`
#[instrument(skip(state))]
pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(params): Query<DashboardParams>,
) -> Result<Json<DashboardResponse>, ApiError> {
    // Same order as the proxy: credential before input
    if !state.dashboard_service.is_ready() {
        return Err(ApiError::Configuration(API_KEY_MISSING.to_string()));
    }

    let city = CityQuery::from_param(params.q.as_deref())
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let unit = params
        .unit
        .as_deref()
        .filter(|raw| !raw.trim().is_empty())
        .map(str::parse::<TemperatureUnit>)
        .transpose()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?
        .unwrap_or_default();

    let dashboard = state.dashboard_service.dashboard(&city).await?;

    Ok(Json(DashboardResponse::render(&dashboard, unit)))
}

/// `GET /v1/cities?q=<text>`, always 200
#[instrument(skip(state))]
pub async fn search_cities(
    State(state): State<AppState>,
    Query(params): Query<CitySearchParams>,
) -> Json<Vec<CityDto>> {
    let results = state
        .dashboard_service
        .search_cities(params.q.as_deref())
        .await;

    Json(results.into_iter().map(CityDto::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{ForecastSample, Humidity};

    // 2024-01-15 00:00:00 UTC, a Monday
    const START: i64 = 1_705_276_800;

    fn sample(timestamp: i64, temperature: f64) -> ForecastSample {
        ForecastSample::new(
            timestamp,
            temperature,
            temperature - 1.0,
            Humidity::clamped(50),
            800,
            "01d",
            "clear sky",
        )
    }

    fn dashboard() -> WeatherDashboard {
        let location = ForecastLocation {
            name: "Oslo".into(),
            country: "NO".into(),
            utc_offset_secs: 3600,
        };
        let samples: Vec<ForecastSample> =
            (0..16).map(|i| sample(START + i * 3 * 3600, 20.0)).collect();

        WeatherDashboard {
            current: CurrentConditions {
                location: location.clone(),
                observed_at: START,
                temperature: 21.4,
                feels_like: 20.6,
                humidity: Humidity::clamped(40),
                pressure: 1012,
                weather_code: 800,
                icon: "01d".into(),
                description: "clear sky".into(),
                wind_speed: 5.0,
            },
            daily: domain::summarize_daily_in(&samples, &Utc),
            hourly: domain::interpolate_hourly(&samples),
            location,
        }
    }

    #[test]
    fn render_uses_requested_unit() {
        let response = DashboardResponse::render(&dashboard(), TemperatureUnit::Fahrenheit);

        assert_eq!(response.current.temperature_display, "71°F");
        assert_eq!(response.current.wind, "18 km/h");
        assert_eq!(response.current.category, WeatherCategory::Clear);
        assert!(response.hourly.iter().all(|h| h.temperature == 68));
    }

    #[test]
    fn render_labels_first_entries() {
        let response = DashboardResponse::render(&dashboard(), TemperatureUnit::Celsius);

        assert_eq!(response.daily[0].label, "Today");
        assert_eq!(response.daily[1].label, "Tue");
        assert_eq!(response.hourly[0].label, "Now");
        // 01:00 UTC is 2 AM at UTC+1
        assert_eq!(response.hourly[1].label, "2 AM");
    }

    #[test]
    fn city_dto_carries_display_name() {
        let dto = CityDto::from(CitySearchResult {
            name: "Springfield".into(),
            latitude: 39.8,
            longitude: -89.6,
            country: "US".into(),
            state: Some("Illinois".into()),
        });
        assert_eq!(dto.display_name, "Springfield, Illinois, US");
    }
}
