//! Upstream operation selector for the weather proxy

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// Which upstream operation a proxied request targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProxyEndpoint {
    /// Current weather for a city
    Weather,
    /// 5-day / 3-hour forecast for a city
    Forecast,
    /// Geocoding city search
    Geo,
}

impl ProxyEndpoint {
    /// Wire name of the selector
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Weather => "weather",
            Self::Forecast => "forecast",
            Self::Geo => "geo",
        }
    }
}

impl fmt::Display for ProxyEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProxyEndpoint {
    type Err = DomainError;

    /// Selectors are matched exactly; `"Weather"` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weather" => Ok(Self::Weather),
            "forecast" => Ok(Self::Forecast),
            "geo" => Ok(Self::Geo),
            other => Err(DomainError::InvalidEndpoint(other.to_string())),
        }
    }
}
