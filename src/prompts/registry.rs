//! Prompt registry, the prompt-side counterpart of the tool registry.

use crate::error::{PromptError, Result};
use crate::protocol::{GetPromptParams, GetPromptResult, Prompt};
use async_trait::async_trait;
use dashmap::DashMap;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

#[async_trait]
pub trait PromptHandler: Send + Sync {
    fn definition(&self) -> Prompt;
    async fn render(&self, arguments: HashMap<String, String>) -> Result<GetPromptResult>;
}

pub struct PromptRegistry {
    prompts: DashMap<String, Arc<dyn PromptHandler>>,
}

impl PromptRegistry {
    pub fn new() -> Self {
        Self {
            prompts: DashMap::new(),
        }
    }

    pub fn register<P: PromptHandler + 'static>(&self, prompt: P) {
        let definition = prompt.definition();
        let name = definition.name.clone();
        debug!("Registering prompt: {}", name);
        self.prompts.insert(name, Arc::new(prompt));
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn PromptHandler>> {
        self.prompts.get(name).map(|r| Arc::clone(&*r))
    }

    /// List definitions sorted by name so listings are deterministic.
    pub fn list(&self) -> Vec<Prompt> {
        let mut prompts: Vec<Prompt> =
            self.prompts.iter().map(|r| r.value().definition()).collect();
        prompts.sort_by(|a, b| a.name.cmp(&b.name));
        prompts
    }

    pub async fn render(&self, params: GetPromptParams) -> Result<GetPromptResult> {
        let prompt = self
            .get(&params.name)
            .ok_or_else(|| PromptError::NotFound(params.name.clone()))?;

        prompt.render(params.arguments).await
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }
}

impl Default for PromptRegistry {
    fn default() -> Self {
        Self::new()
    }
}
