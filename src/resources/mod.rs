//! The `weather://` resource surface.
//!
//! One resource per table entry. Resource URIs are a closed set: reads
//! use the exact table key, no loose matching.

use crate::error::{WeatherError, WeatherResult};
use crate::protocol::{ReadResourceResult, Resource, ResourceContents};
use crate::weather::WeatherStore;
use std::sync::Arc;
use tracing::debug;

/// URI scheme for weather resources.
pub const URI_SCHEME: &str = "weather://";

/// Mime type of every weather resource.
pub const MIME_TYPE: &str = "application/json";

/// Read-only provider over the weather table.
pub struct WeatherResources {
    store: Arc<WeatherStore>,
}

impl WeatherResources {
    pub fn new(store: Arc<WeatherStore>) -> Self {
        Self { store }
    }

    /// List one resource per known location.
    pub fn list(&self) -> Vec<Resource> {
        self.store
            .iter()
            .map(|(key, record)| Resource {
                uri: format!("{URI_SCHEME}{key}"),
                name: format!("Weather for {}", record.location),
                description: Some(format!(
                    "Current weather conditions in {}",
                    record.location
                )),
                mime_type: Some(MIME_TYPE.into()),
            })
            .collect()
    }

    /// Read a resource by URI.
    pub fn read(&self, uri: &str) -> WeatherResult<ReadResourceResult> {
        let Some(key) = uri.strip_prefix(URI_SCHEME) else {
            return Err(WeatherError::InvalidUri(uri.to_string()));
        };

        let record = self
            .store
            .get(key)
            .ok_or_else(|| WeatherError::LocationNotFound(key.to_string()))?;

        debug!("Read resource: {}", uri);

        let text = serde_json::to_string_pretty(record)
            .map_err(|_| WeatherError::InvalidUri(uri.to_string()))?;

        Ok(ReadResourceResult {
            contents: vec![ResourceContents {
                uri: uri.to_string(),
                mime_type: Some(MIME_TYPE.into()),
                text: Some(text),
            }],
        })
    }
}
