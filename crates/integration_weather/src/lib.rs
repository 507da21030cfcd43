//! OpenWeatherMap integration
//!
//! Client for the OpenWeatherMap API (<https://openweathermap.org/api>).
//! Provides current conditions, the 5-day / 3-hour forecast, direct
//! geocoding and a raw pass-through for the proxy endpoint. Every call
//! needs an API key.

pub mod client;
mod models;

pub use client::{
    OpenWeatherClient, UPSTREAM_FALLBACK_MESSAGE, WeatherClient, WeatherConfig, WeatherError,
};
pub use models::{
    CityData, ConditionData, CurrentWeatherResponse, ForecastEntry, ForecastResponse,
    GeoLocationResponse, MainData, SysData, WindData,
};
