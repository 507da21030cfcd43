//! A single timestamped forecast record

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{Humidity, WeatherCategory, is_night_icon};

/// Format of the provider's textual timestamp (`dt_txt`), always UTC
pub const TIME_TEXT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Time component that marks the preferred daily representative
pub const MIDDAY_TIME_TEXT: &str = "12:00:00";

/// One forecast sample as supplied by the upstream provider
///
/// Temperatures are degrees Celsius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSample {
    /// Nominal time of the sample, Unix seconds
    pub timestamp: i64,
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity: Humidity,
    /// Provider condition code (e.g. 800 = clear)
    pub weather_code: u16,
    /// Icon token, e.g. `"01d"`
    pub icon: String,
    pub description: String,
    /// Provider textual timestamp, `YYYY-MM-DD HH:MM:SS` in UTC
    pub time_text: String,
}

impl ForecastSample {
    /// Create a sample, deriving `time_text` from the timestamp
    #[must_use]
    pub fn new(
        timestamp: i64,
        temperature: f64,
        feels_like: f64,
        humidity: Humidity,
        weather_code: u16,
        icon: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            temperature,
            feels_like,
            humidity,
            weather_code,
            icon: icon.into(),
            description: description.into(),
            time_text: utc_time_text(timestamp),
        }
    }

    /// Replace the textual timestamp with the one reported by the provider
    #[must_use]
    pub fn with_time_text(mut self, time_text: impl Into<String>) -> Self {
        self.time_text = time_text.into();
        self
    }

    /// The sample's instant in UTC, if the timestamp is representable
    #[must_use]
    pub fn date_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.timestamp, 0)
    }

    /// Calendar date of the sample as seen from `tz`
    pub fn local_date<Tz: TimeZone>(&self, tz: &Tz) -> Option<NaiveDate> {
        tz.timestamp_opt(self.timestamp, 0)
            .single()
            .map(|dt| dt.date_naive())
    }

    /// Whether the textual time component is exactly `12:00:00`
    #[must_use]
    pub fn is_midday(&self) -> bool {
        self.time_text
            .trim()
            .rsplit([' ', 'T'])
            .next()
            .is_some_and(|time| time == MIDDAY_TIME_TEXT)
    }

    /// Whether the icon marks a night-time condition
    #[must_use]
    pub fn is_night(&self) -> bool {
        is_night_icon(&self.icon)
    }

    /// Visual category of this sample's condition
    #[must_use]
    pub fn category(&self) -> WeatherCategory {
        WeatherCategory::categorize(self.weather_code, &self.icon)
    }
}

/// Render a Unix timestamp the way the provider renders `dt_txt`
#[must_use]
pub fn utc_time_text(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .map(|dt| dt.format(TIME_TEXT_FORMAT).to_string())
        .unwrap_or_default()
}
