//! Daily summary extraction
//!
//! Picks one representative sample per calendar day. Days are keyed by
//! `NaiveDate` in the evaluating zone, not by formatted date strings.
//!
//! The default zone is the machine's local zone, not the forecast location's.
//! Near midnight this can put a sample on a different day than a resident of
//! the city would expect; [`summarize_daily_in`] accepts an explicit zone.

use chrono::{Local, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

use crate::entities::ForecastSample;

/// Maximum number of days returned
pub const MAX_DAILY_SUMMARIES: usize = 5;

/// The representative sample for one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub sample: ForecastSample,
}

/// Summarize samples by day in the local time zone
///
/// See [`summarize_daily_in`].
#[must_use]
pub fn summarize_daily(samples: &[ForecastSample]) -> Vec<DailySummary> {
    summarize_daily_in(samples, &Local)
}

/// Summarize samples by calendar day in `tz`
///
/// The first sample seen for a date is its representative unless a later
/// sample of the same date is midday-tagged, in which case that one wins.
/// Dates keep their order of first appearance and at most
/// [`MAX_DAILY_SUMMARIES`] are returned; sparse input yields fewer entries.
pub fn summarize_daily_in<Tz: TimeZone>(
    samples: &[ForecastSample],
    tz: &Tz,
) -> Vec<DailySummary> {
    let mut summaries: Vec<DailySummary> = Vec::with_capacity(MAX_DAILY_SUMMARIES + 1);

    for sample in samples {
        let Some(date) = sample.local_date(tz) else {
            continue;
        };

        match summaries.iter_mut().find(|summary| summary.date == date) {
            Some(summary) => {
                if sample.is_midday() {
                    summary.sample = sample.clone();
                }
            },
            None => summaries.push(DailySummary {
                date,
                sample: sample.clone(),
            }),
        }
    }

    summaries.truncate(MAX_DAILY_SUMMARIES);
    summaries
}
