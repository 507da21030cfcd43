//! Visual weather category
//!
//! Collapses OpenWeatherMap condition codes into the handful of categories
//! the dashboard uses for backgrounds and effects.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse visual category of a weather condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCategory {
    /// Clear sky, also the fallback for unknown codes
    #[default]
    Clear,
    /// Thunderstorm, drizzle and rain
    Rainy,
    /// Snow
    Snowy,
    /// Clouds and atmosphere (fog, haze, dust)
    Cloudy,
    /// Any condition reported with a night icon
    Night,
}

impl WeatherCategory {
    /// Categorize a condition code together with its icon token
    ///
    /// A night icon (trailing `n`, e.g. `"01n"`) wins over every code rule.
    ///
    /// ```
    /// use domain::value_objects::WeatherCategory;
    ///
    /// assert_eq!(WeatherCategory::categorize(801, "01d"), WeatherCategory::Cloudy);
    /// assert_eq!(WeatherCategory::categorize(800, "01n"), WeatherCategory::Night);
    /// assert_eq!(WeatherCategory::categorize(200, "11d"), WeatherCategory::Rainy);
    /// ```
    #[must_use]
    pub fn categorize(weather_code: u16, icon: &str) -> Self {
        if is_night_icon(icon) {
            return Self::Night;
        }
        Self::from_code(weather_code)
    }

    /// Categorize by condition code alone
    #[must_use]
    pub const fn from_code(weather_code: u16) -> Self {
        match weather_code {
            // thunderstorm, drizzle
            200..=399 | 500..=599 => Self::Rainy,
            600..=699 => Self::Snowy,
            // atmosphere, clouds
            700..=799 | 801.. => Self::Cloudy,
            _ => Self::Clear,
        }
    }

    /// Lowercase name as used by the dashboard stylesheet
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Rainy => "rainy",
            Self::Snowy => "snowy",
            Self::Cloudy => "cloudy",
            Self::Night => "night",
        }
    }
}

impl fmt::Display for WeatherCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Free function form of [`WeatherCategory::categorize`]
#[must_use]
pub fn categorize(weather_code: u16, icon: &str) -> WeatherCategory {
    WeatherCategory::categorize(weather_code, icon)
}

/// OpenWeatherMap icons end in `d` for day and `n` for night
pub(crate) fn is_night_icon(icon: &str) -> bool {
    icon.trim_end().ends_with('n')
}
