//! The `get_weather_forecast` tool.

use crate::error::{Result, ToolError};
use crate::protocol::{CallToolResult, Tool};
use crate::tools::registry::ToolHandler;
use crate::weather::{DEFAULT_FORECAST_DAYS, ForecastDay, WeatherStore, clamp_days, synthesize};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, instrument};

#[derive(Debug, Deserialize)]
pub struct GetWeatherForecastArgs {
    pub location: String,
    #[serde(default)]
    pub days: Option<i64>,
}

/// Synthesizes a short forecast from the mock table.
pub struct GetWeatherForecastTool {
    store: Arc<WeatherStore>,
}

impl GetWeatherForecastTool {
    pub fn new(store: Arc<WeatherStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ToolHandler for GetWeatherForecastTool {
    fn definition(&self) -> Tool {
        Tool {
            name: "get_weather_forecast".into(),
            description: Some(
                "Get weather forecast for a specified location. \
                Day counts outside 1-7 are clamped to the nearest bound."
                    .into(),
            ),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "location": {
                        "type": "string",
                        "description": "The city or location to get forecast for"
                    },
                    "days": {
                        "type": "integer",
                        "description": "Number of days to forecast (1-7)",
                        "default": DEFAULT_FORECAST_DAYS
                    }
                },
                "required": ["location"]
            }),
        }
    }

    #[instrument(skip(self, arguments), fields(tool = "get_weather_forecast"))]
    async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
        let args: GetWeatherForecastArgs = serde_json::from_value(arguments)
            .map_err(|e| ToolError::InvalidArguments(e.to_string()))?;

        let record = match self.store.lookup(&args.location) {
            Ok(record) => record,
            Err(e) => {
                return Ok(CallToolResult::error(format!(
                    "Error getting forecast for {}: {}",
                    args.location, e
                )));
            }
        };

        let days = clamp_days(args.days.unwrap_or(DEFAULT_FORECAST_DAYS));
        debug!("Synthesizing {} forecast days", days);

        let output = ForecastOutput {
            location: args.location,
            forecast_days: days,
            forecast: synthesize(record, days),
        };

        Ok(CallToolResult::json(&output))
    }
}

#[derive(Debug, Serialize)]
struct ForecastOutput {
    location: String,
    forecast_days: u32,
    forecast: Vec<ForecastDay>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::McpError;

    fn tool() -> GetWeatherForecastTool {
        GetWeatherForecastTool::new(Arc::new(WeatherStore::new()))
    }

    async fn forecast_len(days: i64) -> usize {
        let result = tool()
            .execute(serde_json::json!({"location": "London", "days": days}))
            .await
            .unwrap();
        assert!(result.is_error.is_none());

        let body: Value = serde_json::from_str(result.content[0].as_text()).unwrap();
        body["forecast"].as_array().unwrap().len()
    }

    #[tokio::test]
    async fn test_default_days() {
        let result = tool()
            .execute(serde_json::json!({"location": "Tokyo"}))
            .await
            .unwrap();

        let body: Value = serde_json::from_str(result.content[0].as_text()).unwrap();
        assert_eq!(body["forecast_days"], 3);
        assert_eq!(body["forecast"].as_array().unwrap().len(), 3);
        assert_eq!(body["location"], "Tokyo");
    }

    #[tokio::test]
    async fn test_days_clamped_to_bounds() {
        assert_eq!(forecast_len(0).await, 1);
        assert_eq!(forecast_len(8).await, 7);
        assert_eq!(forecast_len(5).await, 5);
    }

    #[tokio::test]
    async fn test_unknown_location_is_tool_error() {
        let result = tool()
            .execute(serde_json::json!({"location": "Narnia", "days": 2}))
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(true));
        assert!(result.content[0].as_text().contains("Narnia"));
    }

    #[tokio::test]
    async fn test_missing_location_rejected() {
        let err = tool()
            .execute(serde_json::json!({"days": 3}))
            .await
            .unwrap_err();
        assert!(matches!(err, McpError::Tool(ToolError::InvalidArguments(_))));
    }
}
