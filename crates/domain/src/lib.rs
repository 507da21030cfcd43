//! Domain layer for Skycast
//!
//! Contains the forecast entities, value objects and the pure normalization
//! pipeline that turns raw 3-hour forecast samples into daily and hourly
//! sequences. This layer performs no I/O.

pub mod display;
pub mod entities;
pub mod errors;
pub mod forecast;
pub mod units;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use forecast::{
    DailySummary, HourlySample, interpolate_hourly, summarize_daily, summarize_daily_in,
};
pub use value_objects::*;
