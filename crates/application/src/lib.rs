//! Application layer - Use cases and orchestration
//!
//! Defines the weather port and the services built on it: the raw proxy
//! relay and the normalized dashboard.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
