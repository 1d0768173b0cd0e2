//! Server state management.

use crate::config::ServerConfig;
use crate::prompts::PromptRegistry;
use crate::protocol::ClientInfo;
use crate::resources::WeatherResources;
use crate::tools::ToolRegistry;
use crate::weather::WeatherStore;
use parking_lot::RwLock;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

pub struct ServerState {
    pub config: ServerConfig,
    pub store: Arc<WeatherStore>,
    pub resources: WeatherResources,
    pub tools: ToolRegistry,
    pub prompts: PromptRegistry,
    initialized: AtomicBool,
    client_info: RwLock<Option<ClientInfo>>,
    request_count: AtomicU64,
}

impl ServerState {
    pub fn new(
        config: ServerConfig,
        store: Arc<WeatherStore>,
        resources: WeatherResources,
        tools: ToolRegistry,
        prompts: PromptRegistry,
    ) -> Self {
        Self {
            config,
            store,
            resources,
            tools,
            prompts,
            initialized: AtomicBool::new(false),
            client_info: RwLock::new(None),
            request_count: AtomicU64::new(0),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::SeqCst)
    }

    pub fn set_initialized(&self, client_info: ClientInfo) {
        *self.client_info.write() = Some(client_info);
        self.initialized.store(true, Ordering::SeqCst);
    }

    pub fn client_info(&self) -> Option<ClientInfo> {
        self.client_info.read().clone()
    }

    pub fn record_request(&self) -> u64 {
        self.request_count.fetch_add(1, Ordering::SeqCst)
    }

    pub fn request_count(&self) -> u64 {
        self.request_count.load(Ordering::SeqCst)
    }
}

pub struct ServerStateBuilder {
    config: Option<ServerConfig>,
    store: Option<Arc<WeatherStore>>,
}

impl ServerStateBuilder {
    pub fn new() -> Self {
        Self {
            config: None,
            store: None,
        }
    }

    pub fn config(mut self, config: ServerConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn store(mut self, store: Arc<WeatherStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn build(self) -> Result<ServerState, &'static str> {
        let config = self.config.ok_or("Config is required")?;
        let store = self.store.unwrap_or_else(|| Arc::new(WeatherStore::new()));

        let resources = WeatherResources::new(Arc::clone(&store));
        let tools = crate::tools::create_registry(Arc::clone(&store));
        let prompts = crate::prompts::create_registry(Arc::clone(&store));

        Ok(ServerState::new(config, store, resources, tools, prompts))
    }
}

impl Default for ServerStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_wires_all_surfaces() {
        let state = ServerStateBuilder::new()
            .config(ServerConfig::default())
            .build()
            .unwrap();

        assert_eq!(state.store.len(), 3);
        assert_eq!(state.resources.list().len(), 3);
        assert_eq!(state.tools.len(), 2);
        assert_eq!(state.prompts.len(), 2);
        assert!(!state.is_initialized());
    }

    #[test]
    fn test_builder_requires_config() {
        assert!(ServerStateBuilder::new().build().is_err());
    }

    #[test]
    fn test_initialization_tracking() {
        let state = ServerStateBuilder::new()
            .config(ServerConfig::default())
            .build()
            .unwrap();

        assert!(state.client_info().is_none());
        state.set_initialized(ClientInfo {
            name: "test-client".into(),
            version: "1.0".into(),
        });

        assert!(state.is_initialized());
        assert_eq!(state.client_info().unwrap().name, "test-client");
    }

    #[test]
    fn test_request_counter() {
        let state = ServerStateBuilder::new()
            .config(ServerConfig::default())
            .build()
            .unwrap();

        assert_eq!(state.record_request(), 0);
        assert_eq!(state.record_request(), 1);
        assert_eq!(state.request_count(), 2);
    }
}
