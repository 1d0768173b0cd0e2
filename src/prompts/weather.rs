//! Prompts: weather_report, weather_comparison

use crate::error::{PromptError, Result};
use crate::prompts::registry::PromptHandler;
use crate::protocol::{GetPromptResult, Prompt, PromptArgument, PromptMessage};
use crate::weather::{WeatherRecord, WeatherStore};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::instrument;

fn required<'a>(
    arguments: &'a HashMap<String, String>,
    name: &'static str,
) -> std::result::Result<&'a str, PromptError> {
    arguments
        .get(name)
        .map(String::as_str)
        .ok_or(PromptError::MissingArgument(name.into()))
}

fn record_json(record: &WeatherRecord) -> String {
    serde_json::to_string_pretty(record).unwrap_or_else(|e| e.to_string())
}

/// Generates a report-writing prompt around one location's record.
pub struct WeatherReportPrompt {
    store: Arc<WeatherStore>,
}

impl WeatherReportPrompt {
    pub fn new(store: Arc<WeatherStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PromptHandler for WeatherReportPrompt {
    fn definition(&self) -> Prompt {
        Prompt {
            name: "weather_report".into(),
            description: Some("Generate a weather report for a location".into()),
            arguments: Some(vec![PromptArgument {
                name: "location".into(),
                description: Some("The location to generate a weather report for".into()),
                required: Some(true),
            }]),
        }
    }

    #[instrument(skip(self, arguments), fields(prompt = "weather_report"))]
    async fn render(&self, arguments: HashMap<String, String>) -> Result<GetPromptResult> {
        let location = required(&arguments, "location")?;
        let record = self.store.lookup(location)?;

        let prompt_text = format!(
            "Please provide a detailed weather report for {location} based on the following data:\n\
            \n\
            {data}\n\
            \n\
            Include:\n\
            - Current temperature and conditions\n\
            - Humidity and wind information\n\
            - Any recommendations for outdoor activities\n\
            - Comparison to seasonal averages if possible\n",
            location = location,
            data = record_json(record),
        );

        Ok(GetPromptResult {
            description: Some(format!("Weather report for {location}")),
            messages: vec![PromptMessage::user(prompt_text)],
        })
    }
}

/// Generates a comparison prompt around two locations' records.
pub struct WeatherComparisonPrompt {
    store: Arc<WeatherStore>,
}

impl WeatherComparisonPrompt {
    pub fn new(store: Arc<WeatherStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PromptHandler for WeatherComparisonPrompt {
    fn definition(&self) -> Prompt {
        Prompt {
            name: "weather_comparison".into(),
            description: Some("Compare weather between two locations".into()),
            arguments: Some(vec![
                PromptArgument {
                    name: "location1".into(),
                    description: Some("First location to compare".into()),
                    required: Some(true),
                },
                PromptArgument {
                    name: "location2".into(),
                    description: Some("Second location to compare".into()),
                    required: Some(true),
                },
            ]),
        }
    }

    #[instrument(skip(self, arguments), fields(prompt = "weather_comparison"))]
    async fn render(&self, arguments: HashMap<String, String>) -> Result<GetPromptResult> {
        let location1 = required(&arguments, "location1")?;
        let location2 = required(&arguments, "location2")?;
        let record1 = self.store.lookup(location1)?;
        let record2 = self.store.lookup(location2)?;

        let prompt_text = format!(
            "Compare the weather conditions between {location1} and {location2}:\n\
            \n\
            {location1} Weather:\n\
            {data1}\n\
            \n\
            {location2} Weather:\n\
            {data2}\n\
            \n\
            Please provide a comparison highlighting:\n\
            - Temperature differences\n\
            - Weather conditions\n\
            - Which location might be better for outdoor activities\n\
            - Any notable differences in humidity or wind\n",
            location1 = location1,
            location2 = location2,
            data1 = record_json(record1),
            data2 = record_json(record2),
        );

        Ok(GetPromptResult {
            description: Some(format!(
                "Weather comparison between {location1} and {location2}"
            )),
            messages: vec![PromptMessage::user(prompt_text)],
        })
    }
}
