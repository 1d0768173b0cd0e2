//! The fixed mock weather table.
//!
//! Built once at startup and never mutated. Keys are a closed set; the
//! sample values match the well-known demo records for New York, London
//! and Tokyo.

use crate::error::{WeatherError, WeatherResult};
use serde::{Deserialize, Serialize};

/// Timestamp stamped on every record. Fixed: the data is mock.
pub const LAST_UPDATED: &str = "2024-01-15T14:30:00Z";

/// A single weather observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    /// Display name, e.g. "New York, NY".
    pub location: String,
    /// Temperature in degrees Fahrenheit.
    pub temperature: i32,
    /// Relative humidity in percent.
    pub humidity: u32,
    pub conditions: String,
    /// Wind speed in mph.
    pub wind_speed: u32,
    pub last_updated: String,
}

impl WeatherRecord {
    fn new(location: &str, temperature: i32, humidity: u32, conditions: &str, wind_speed: u32) -> Self {
        Self {
            location: location.into(),
            temperature,
            humidity,
            conditions: conditions.into(),
            wind_speed,
            last_updated: LAST_UPDATED.into(),
        }
    }
}

/// In-memory table of mock weather data keyed by location.
///
/// Entries keep insertion order so listings are deterministic.
pub struct WeatherStore {
    entries: Vec<(&'static str, WeatherRecord)>,
}

impl WeatherStore {
    pub fn new() -> Self {
        Self {
            entries: vec![
                (
                    "new_york",
                    WeatherRecord::new("New York, NY", 72, 65, "Partly cloudy", 8),
                ),
                (
                    "london",
                    WeatherRecord::new("London, UK", 18, 78, "Overcast", 12),
                ),
                (
                    "tokyo",
                    WeatherRecord::new("Tokyo, Japan", 25, 60, "Clear", 5),
                ),
            ],
        }
    }

    /// Iterate over `(key, record)` pairs in listing order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &WeatherRecord)> {
        self.entries.iter().map(|(key, record)| (*key, record))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact-key lookup, used by the resource surface where URIs are a
    /// closed set.
    pub fn get(&self, key: &str) -> Option<&WeatherRecord> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, record)| record)
    }

    /// Free-form lookup, used by tools and prompts.
    ///
    /// The input is normalized and matched loosely against the table so
    /// "New York" and "new york city" both find `new_york`. Unknown
    /// locations are an error.
    pub fn lookup(&self, location: &str) -> WeatherResult<&WeatherRecord> {
        let key = normalize_location(location);
        if key.is_empty() {
            return Err(WeatherError::LocationNotFound(location.to_string()));
        }

        self.entries
            .iter()
            .find(|(k, _)| key.contains(k) || k.contains(key.as_str()))
            .map(|(_, record)| record)
            .ok_or_else(|| WeatherError::LocationNotFound(location.to_string()))
    }
}

impl Default for WeatherStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize a user-supplied location to table-key form: lowercase,
/// spaces to underscores, commas stripped.
pub fn normalize_location(location: &str) -> String {
    location.trim().to_lowercase().replace(' ', "_").replace(',', "")
}
