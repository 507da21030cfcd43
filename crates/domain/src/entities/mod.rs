//! Domain entities - forecast records and provider payloads

mod forecast;
mod forecast_sample;

pub use forecast::{CitySearchResult, CurrentConditions, ForecastLocation, ForecastPayload};
pub use forecast_sample::{ForecastSample, MIDDAY_TIME_TEXT, TIME_TEXT_FORMAT, utc_time_text};
