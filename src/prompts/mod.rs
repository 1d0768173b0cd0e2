//! MCP prompt templates and registry.

pub mod registry;
pub mod weather;

pub use registry::{PromptHandler, PromptRegistry};
pub use weather::{WeatherComparisonPrompt, WeatherReportPrompt};

use crate::weather::WeatherStore;
use std::sync::Arc;

/// Create and register all prompts.
pub fn create_registry(store: Arc<WeatherStore>) -> PromptRegistry {
    let registry = PromptRegistry::new();

    registry.register(WeatherReportPrompt::new(Arc::clone(&store)));
    registry.register(WeatherComparisonPrompt::new(store));

    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_registry_registers_both_prompts() {
        let registry = create_registry(Arc::new(WeatherStore::new()));

        let names: Vec<String> = registry.list().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["weather_comparison", "weather_report"]);
    }
}
