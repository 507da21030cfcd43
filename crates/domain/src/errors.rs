//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// A required query string was missing or blank
    #[error("Query parameter \"q\" is required")]
    MissingQuery,

    /// The proxy endpoint selector is not one of the supported values
    #[error("Invalid endpoint specified. Use \"weather\", \"forecast\", or \"geo\".")]
    InvalidEndpoint(String),

    /// The temperature unit is not recognised
    #[error("Invalid temperature unit: {0}. Use 'c' or 'f'")]
    InvalidTemperatureUnit(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_query_message_matches_proxy_contract() {
        assert_eq!(
            DomainError::MissingQuery.to_string(),
            "Query parameter \"q\" is required"
        );
    }

    #[test]
    fn invalid_endpoint_message_lists_supported_values() {
        let err = DomainError::InvalidEndpoint("radar".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid endpoint specified. Use \"weather\", \"forecast\", or \"geo\"."
        );
    }

    #[test]
    fn invalid_unit_message() {
        let err = DomainError::InvalidTemperatureUnit("k".to_string());
        assert_eq!(err.to_string(), "Invalid temperature unit: k. Use 'c' or 'f'");
    }
}
