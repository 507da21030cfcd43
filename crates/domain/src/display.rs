//! Display helpers for dashboard labels and readings

use std::fmt::Display;

use chrono::{DateTime, TimeZone};

use crate::units::{celsius_to_fahrenheit, meters_per_second_to_kmh, whole_celsius};
use crate::value_objects::TemperatureUnit;

/// Label used for the first daily entry
pub const TODAY_LABEL: &str = "Today";

/// Label used for the first hourly entry
pub const NOW_LABEL: &str = "Now";

/// Whole-degree value of a Celsius reading in `unit`
#[must_use]
pub fn temperature_in(celsius: f64, unit: TemperatureUnit) -> i32 {
    match unit {
        TemperatureUnit::Celsius => whole_celsius(celsius),
        TemperatureUnit::Fahrenheit => celsius_to_fahrenheit(celsius),
    }
}

/// Format a Celsius reading, e.g. `"21°C"` or `"70°F"`
///
/// ```
/// use domain::display::format_temperature;
/// use domain::value_objects::TemperatureUnit;
///
/// assert_eq!(format_temperature(21.3, TemperatureUnit::Celsius), "21°C");
/// assert_eq!(format_temperature(21.3, TemperatureUnit::Fahrenheit), "70°F");
/// ```
#[must_use]
pub fn format_temperature(celsius: f64, unit: TemperatureUnit) -> String {
    format!("{}{}", temperature_in(celsius, unit), unit.symbol())
}

/// Format a wind speed given in m/s as km/h
#[must_use]
pub fn format_wind_speed(meters_per_second: f64) -> String {
    format!("{} km/h", meters_per_second_to_kmh(meters_per_second))
}

/// Short English weekday of a timestamp shifted by the location's UTC offset
///
/// ```
/// use domain::display::day_name;
///
/// // 2024-01-15 23:00 UTC is Tuesday at UTC+2
/// assert_eq!(day_name(1_705_359_600, 0), "Mon");
/// assert_eq!(day_name(1_705_359_600, 7200), "Tue");
/// ```
#[must_use]
pub fn day_name(timestamp: i64, utc_offset_secs: i32) -> String {
    DateTime::from_timestamp(timestamp.saturating_add(i64::from(utc_offset_secs)), 0)
        .map(|dt| dt.format("%a").to_string())
        .unwrap_or_default()
}

/// Label for the `index`-th daily summary
#[must_use]
pub fn daily_label(index: usize, timestamp: i64, utc_offset_secs: i32) -> String {
    if index == 0 {
        TODAY_LABEL.to_string()
    } else {
        day_name(timestamp, utc_offset_secs)
    }
}

/// Label for the `index`-th hourly sample: `"Now"`, then `"3 PM"` style hours in `tz`
pub fn hourly_label<Tz>(index: usize, timestamp: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if index == 0 {
        return NOW_LABEL.to_string();
    }
    tz.timestamp_opt(timestamp, 0)
        .single()
        .map(|dt| dt.format("%-I %p").to_string())
        .unwrap_or_default()
}
