//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error (invalid input)
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Server-side configuration is missing or invalid
    #[error("{0}")]
    Configuration(String),

    /// The upstream provider answered with a non-success status
    #[error("Upstream error ({status}): {message}")]
    Upstream {
        /// HTTP status code returned by the provider
        status: u16,
        /// Provider message, or a generic fallback
        message: String,
    },

    /// The upstream provider could not be reached
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
