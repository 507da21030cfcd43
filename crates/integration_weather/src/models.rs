//! OpenWeatherMap wire models
//!
//! Response shapes of the current weather, forecast and geocoding APIs,
//! plus their conversion into domain types. Only the fields the dashboard
//! uses are decoded; everything else is ignored.

use domain::{
    CitySearchResult, CurrentConditions, ForecastLocation, ForecastPayload, ForecastSample,
    Humidity,
};
use serde::Deserialize;

/// One entry of the provider's `weather` array
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConditionData {
    pub id: u16,
    #[serde(default)]
    pub main: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

/// The provider's `main` block
#[derive(Debug, Clone, Deserialize)]
pub struct MainData {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: u8,
    #[serde(default)]
    pub pressure: u32,
}

/// The provider's `wind` block
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WindData {
    #[serde(default)]
    pub speed: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SysData {
    #[serde(default)]
    pub country: String,
}

/// Response of `GET /weather`
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeatherResponse {
    pub name: String,
    #[serde(default)]
    pub sys: SysData,
    pub main: MainData,
    #[serde(default)]
    pub weather: Vec<ConditionData>,
    #[serde(default)]
    pub wind: WindData,
    pub dt: i64,
    /// Shift from UTC in seconds
    #[serde(default)]
    pub timezone: i32,
}

impl CurrentWeatherResponse {
    pub fn into_domain(self) -> CurrentConditions {
        let condition = first_condition(self.weather);
        CurrentConditions {
            location: ForecastLocation {
                name: self.name,
                country: self.sys.country,
                utc_offset_secs: self.timezone,
            },
            observed_at: self.dt,
            temperature: self.main.temp,
            feels_like: self.main.feels_like,
            humidity: Humidity::clamped(self.main.humidity),
            pressure: self.main.pressure,
            weather_code: condition.id,
            icon: condition.icon,
            description: condition.description,
            wind_speed: self.wind.speed,
        }
    }
}

/// One 3-hour entry of the forecast `list`
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastEntry {
    pub dt: i64,
    pub main: MainData,
    #[serde(default)]
    pub weather: Vec<ConditionData>,
    /// `"2024-01-15 12:00:00"`, always UTC
    #[serde(default)]
    pub dt_txt: Option<String>,
}

impl ForecastEntry {
    fn into_sample(self) -> ForecastSample {
        let condition = first_condition(self.weather);
        let sample = ForecastSample::new(
            self.dt,
            self.main.temp,
            self.main.feels_like,
            Humidity::clamped(self.main.humidity),
            condition.id,
            condition.icon,
            condition.description,
        );
        match self.dt_txt {
            Some(text) => sample.with_time_text(text),
            None => sample,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CityData {
    pub name: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub timezone: i32,
}

/// Response of `GET /forecast`
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub list: Vec<ForecastEntry>,
    pub city: CityData,
}

impl ForecastResponse {
    pub fn into_domain(self) -> ForecastPayload {
        let mut samples: Vec<ForecastSample> =
            self.list.into_iter().map(ForecastEntry::into_sample).collect();
        // The normalizers expect non-decreasing timestamps
        samples.sort_by_key(|sample| sample.timestamp);

        ForecastPayload {
            location: ForecastLocation {
                name: self.city.name,
                country: self.city.country,
                utc_offset_secs: self.city.timezone,
            },
            samples,
        }
    }
}

/// One match of `GET /direct`
#[derive(Debug, Clone, Deserialize)]
pub struct GeoLocationResponse {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub state: Option<String>,
}

impl GeoLocationResponse {
    pub fn into_domain(self) -> CitySearchResult {
        CitySearchResult {
            name: self.name,
            latitude: self.lat,
            longitude: self.lon,
            country: self.country,
            state: self.state,
        }
    }
}

fn first_condition(conditions: Vec<ConditionData>) -> ConditionData {
    conditions.into_iter().next().unwrap_or_default()
}
