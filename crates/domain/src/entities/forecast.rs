//! Provider payloads in domain form

use serde::{Deserialize, Serialize};

use super::forecast_sample::ForecastSample;
use crate::value_objects::{Humidity, WeatherCategory};

/// Where a forecast applies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastLocation {
    pub name: String,
    /// ISO 3166 country code
    pub country: String,
    /// Offset of the location from UTC in seconds
    pub utc_offset_secs: i32,
}

/// A 5-day / 3-hour forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPayload {
    pub location: ForecastLocation,
    /// Samples in non-decreasing timestamp order
    pub samples: Vec<ForecastSample>,
}

impl ForecastPayload {
    /// Whether the payload carries any samples at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Current weather conditions for a city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub location: ForecastLocation,
    /// Observation time, Unix seconds
    pub observed_at: i64,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Apparent temperature in Celsius
    pub feels_like: f64,
    pub humidity: Humidity,
    /// Sea-level pressure in hPa
    pub pressure: u32,
    pub weather_code: u16,
    pub icon: String,
    pub description: String,
    /// Wind speed in m/s
    pub wind_speed: f64,
}

impl CurrentConditions {
    /// Visual category of the current condition
    #[must_use]
    pub fn category(&self) -> WeatherCategory {
        WeatherCategory::categorize(self.weather_code, &self.icon)
    }
}

/// A geocoding match for an autocomplete query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CitySearchResult {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl CitySearchResult {
    /// `"Springfield, Illinois, US"` style label for dropdowns
    #[must_use]
    pub fn display_name(&self) -> String {
        match &self.state {
            Some(state) => format!("{}, {}, {}", self.name, state, self.country),
            None => format!("{}, {}", self.name, self.country),
        }
    }
}
