//! The `get_weather` tool.

use crate::error::{Result, ToolError};
use crate::protocol::{CallToolResult, Tool};
use crate::tools::registry::ToolHandler;
use crate::weather::WeatherStore;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

#[derive(Debug, Deserialize)]
pub struct GetWeatherArgs {
    pub location: String,
}

/// Returns the current mock observation for a location.
pub struct GetWeatherTool {
    store: Arc<WeatherStore>,
}

impl GetWeatherTool {
    pub fn new(store: Arc<WeatherStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ToolHandler for GetWeatherTool {
    fn definition(&self) -> Tool {
        Tool {
            name: "get_weather".into(),
            description: Some(
                "Get current weather information for a specified location".into(),
            ),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "location": {
                        "type": "string",
                        "description": "The city or location to get weather for"
                    }
                },
                "required": ["location"]
            }),
        }
    }

    #[instrument(skip(self, arguments), fields(tool = "get_weather"))]
    async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
        let args: GetWeatherArgs = serde_json::from_value(arguments)
            .map_err(|e| ToolError::InvalidArguments(e.to_string()))?;

        // Unknown locations are a tool-level failure, not a protocol one
        match self.store.lookup(&args.location) {
            Ok(record) => Ok(CallToolResult::json(record)),
            Err(e) => Ok(CallToolResult::error(format!(
                "Error getting weather for {}: {}",
                args.location, e
            ))),
        }
    }
}
