//! Infrastructure layer - Adapters for external systems
//!
//! Implements the weather port on top of `integration_weather` and loads
//! the application configuration.

pub mod adapters;
pub mod config;

pub use adapters::*;
pub use config::{AppConfig, Environment, LogFormat, ServerConfig, WeatherAppConfig};
