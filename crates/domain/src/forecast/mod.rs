//! Forecast normalization
//!
//! Pure functions turning the provider's 3-hour samples into the sequences
//! the dashboard renders: one summary per day and an hourly strip for the
//! next 24 hours.

mod daily;
mod hourly;

pub use daily::{DailySummary, MAX_DAILY_SUMMARIES, summarize_daily, summarize_daily_in};
pub use hourly::{HOURLY_WINDOW, HourlySample, MAX_HOURLY_SAMPLES, interpolate_hourly};
