//! Value Objects - Immutable, identity-less domain primitives

mod city_query;
mod humidity;
mod proxy_endpoint;
mod temperature_unit;
mod weather_category;

pub use city_query::CityQuery;
pub use humidity::{Humidity, InvalidHumidity};
pub use proxy_endpoint::ProxyEndpoint;
pub use temperature_unit::TemperatureUnit;
pub(crate) use weather_category::is_night_icon;
pub use weather_category::{WeatherCategory, categorize};
