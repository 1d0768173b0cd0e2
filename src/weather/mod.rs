//! Mock weather data and forecast synthesis.

pub mod forecast;
pub mod store;

pub use forecast::{
    DEFAULT_FORECAST_DAYS, ForecastDay, MAX_FORECAST_DAYS, MIN_FORECAST_DAYS, clamp_days,
    synthesize,
};
pub use store::{LAST_UPDATED, WeatherRecord, WeatherStore, normalize_location};
