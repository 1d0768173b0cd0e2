//! Mock forecast synthesis.
//!
//! Forecasts are derived from the base record: day *i* shifts the
//! temperature by `i * 2 - 2` degrees and advances the date from a fixed
//! base day. Out-of-range day counts are clamped, not rejected.

use crate::weather::store::WeatherRecord;
use chrono::{Days, NaiveDate};
use serde::Serialize;

/// Smallest forecast horizon.
pub const MIN_FORECAST_DAYS: i64 = 1;
/// Largest forecast horizon.
pub const MAX_FORECAST_DAYS: i64 = 7;
/// Horizon used when the caller does not ask for one.
pub const DEFAULT_FORECAST_DAYS: i64 = 3;

/// One synthesized forecast day: the base record with an adjusted
/// temperature plus the forecast date.
#[derive(Debug, Clone, Serialize)]
pub struct ForecastDay {
    #[serde(flatten)]
    pub weather: WeatherRecord,
    pub date: String,
}

/// Clamp a requested day count to the supported 1..=7 range.
pub fn clamp_days(days: i64) -> u32 {
    days.clamp(MIN_FORECAST_DAYS, MAX_FORECAST_DAYS) as u32
}

/// Synthesize `days` forecast entries from a base record.
///
/// `days` must already be clamped; the output length always equals it.
pub fn synthesize(base: &WeatherRecord, days: u32) -> Vec<ForecastDay> {
    (0..days)
        .map(|i| {
            let mut weather = base.clone();
            weather.temperature += (i as i32) * 2 - 2;
            ForecastDay {
                weather,
                date: forecast_date(i),
            }
        })
        .collect()
}

// First forecast day is the day after the fixed observation date.
fn forecast_date(offset: u32) -> String {
    let base = NaiveDate::from_ymd_opt(2024, 1, 16).unwrap_or_default();
    base.checked_add_days(Days::new(u64::from(offset)))
        .unwrap_or(base)
        .format("%Y-%m-%d")
        .to_string()
}
