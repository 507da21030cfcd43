//! Free-text city query

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// A non-blank city search string
///
/// ```
/// use domain::value_objects::CityQuery;
///
/// let query = CityQuery::parse("  London ").expect("non-blank");
/// assert_eq!(query.as_str(), "London");
/// assert!(CityQuery::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CityQuery(String);

impl CityQuery {
    /// Minimum length before a query is worth sending to the geocoder
    pub const MIN_SEARCH_LEN: usize = 2;

    /// Parse a query, trimming surrounding whitespace
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::MissingQuery);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Parse an optional query parameter
    pub fn from_param(raw: Option<&str>) -> Result<Self, DomainError> {
        raw.map_or(Err(DomainError::MissingQuery), Self::parse)
    }

    /// Whether the query is long enough for autocomplete search
    #[must_use]
    pub fn is_searchable(&self) -> bool {
        self.0.chars().count() >= Self::MIN_SEARCH_LEN
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CityQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CityQuery {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CityQuery> for String {
    fn from(query: CityQuery) -> Self {
        query.0
    }
}
