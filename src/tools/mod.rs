//! MCP tool definitions and registry.

pub mod forecast;
pub mod registry;
pub mod weather;

pub use forecast::GetWeatherForecastTool;
pub use registry::{ToolHandler, ToolRegistry};
pub use weather::GetWeatherTool;

use crate::weather::WeatherStore;
use std::sync::Arc;

/// Create and register all tools.
pub fn create_registry(store: Arc<WeatherStore>) -> ToolRegistry {
    let registry = ToolRegistry::new();

    registry.register(GetWeatherTool::new(Arc::clone(&store)));
    registry.register(GetWeatherForecastTool::new(store));

    registry
}
