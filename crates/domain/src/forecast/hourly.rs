//! Hourly interpolation of 3-hour forecast samples

use serde::{Deserialize, Serialize};

use crate::entities::{ForecastSample, utc_time_text};

/// Number of raw samples considered (eight 3-hour intervals)
pub const HOURLY_WINDOW: usize = 9;

/// Maximum number of hourly entries returned
pub const MAX_HOURLY_SAMPLES: usize = 24;

const SECONDS_PER_HOUR: i64 = 3600;

/// Hourly steps per raw interval, including the original sample
const STEPS_PER_INTERVAL: u8 = 3;

/// A sample at 1-hour resolution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlySample {
    #[serde(flatten)]
    pub sample: ForecastSample,
    /// `false` for raw provider samples, `true` for synthesized ones
    pub interpolated: bool,
}

impl HourlySample {
    fn original(sample: &ForecastSample) -> Self {
        Self {
            sample: sample.clone(),
            interpolated: false,
        }
    }

    /// Synthesize the sample `step` hours after `current` on the way to `next`
    ///
    /// Condition fields are copied from `current`; only the numeric readings
    /// are interpolated.
    fn between(current: &ForecastSample, next: &ForecastSample, step: u8) -> Self {
        let fraction = f64::from(step) / f64::from(STEPS_PER_INTERVAL);
        let timestamp = current
            .timestamp
            .saturating_add(i64::from(step) * SECONDS_PER_HOUR);

        Self {
            sample: ForecastSample {
                timestamp,
                temperature: lerp(current.temperature, next.temperature, step),
                feels_like: lerp(current.feels_like, next.feels_like, step),
                humidity: current.humidity.interpolate(next.humidity, fraction),
                weather_code: current.weather_code,
                icon: current.icon.clone(),
                description: current.description.clone(),
                time_text: utc_time_text(timestamp),
            },
            interpolated: true,
        }
    }
}

fn lerp(from: f64, to: f64, step: u8) -> f64 {
    from + (to - from) * f64::from(step) / f64::from(STEPS_PER_INTERVAL)
}

/// Expand up to the first [`HOURLY_WINDOW`] samples to hourly resolution
///
/// Every consecutive pair contributes the earlier sample plus two
/// interpolated samples one and two hours after it. The final raw sample
/// only serves as an interpolation endpoint. With fewer than two samples
/// there is nothing to interpolate and the result is empty.
#[must_use]
pub fn interpolate_hourly(samples: &[ForecastSample]) -> Vec<HourlySample> {
    let window = &samples[..samples.len().min(HOURLY_WINDOW)];
    let mut hourly = Vec::with_capacity(MAX_HOURLY_SAMPLES);

    for pair in window.windows(2) {
        let [current, next] = pair else {
            continue;
        };

        hourly.push(HourlySample::original(current));
        for step in 1..STEPS_PER_INTERVAL {
            hourly.push(HourlySample::between(current, next, step));
        }
    }

    hourly.truncate(MAX_HOURLY_SAMPLES);
    hourly
}
