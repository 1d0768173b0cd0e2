//! MCP request handler implementation.

use crate::error::{McpError, ProtocolError, ProtocolResult};
use crate::protocol::{
    CallToolParams, CallToolResult, GetPromptParams, GetPromptResult, Handler, InitializeParams,
    InitializeResult, ListPromptsResult, ListResourcesResult, ListToolsResult, MCP_VERSION,
    PromptsCapability, ReadResourceParams, ReadResourceResult, ResourcesCapability,
    ServerCapabilities, ServerInfo, ToolsCapability,
};
use crate::server::state::ServerState;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// MCP request handler that processes protocol messages.
pub struct McpHandler {
    state: Arc<ServerState>,
}

impl McpHandler {
    pub fn new(state: Arc<ServerState>) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &Arc<ServerState> {
        &self.state
    }

    fn instructions(&self) -> String {
        let tools: Vec<String> = self
            .state
            .tools
            .list()
            .into_iter()
            .map(|tool| tool.name)
            .collect();
        let prompts: Vec<String> = self
            .state
            .prompts
            .list()
            .into_iter()
            .map(|prompt| prompt.name)
            .collect();
        let uris: Vec<String> = self
            .state
            .resources
            .list()
            .into_iter()
            .map(|resource| resource.uri)
            .collect();

        format!(
            "Weather MCP Server serving mock data. \
            Resources: {}. Tools: {}. Prompts: {}.",
            uris.join(", "),
            tools.join(", "),
            prompts.join(", ")
        )
    }
}

fn invalid_params(e: impl std::fmt::Display) -> ProtocolError {
    ProtocolError::InvalidParams(e.to_string().into())
}

#[async_trait]
impl Handler for McpHandler {
    async fn initialize(&self, params: InitializeParams) -> ProtocolResult<InitializeResult> {
        info!(
            "Initialize request from {} v{}",
            params.client_info.name, params.client_info.version
        );
        debug!("Client protocol version: {}", params.protocol_version);

        self.state.set_initialized(params.client_info);

        let capabilities = ServerCapabilities {
            resources: Some(ResourcesCapability {
                subscribe: Some(false),
                list_changed: Some(false),
            }),
            tools: Some(ToolsCapability {
                list_changed: Some(false),
            }),
            prompts: Some(PromptsCapability {
                list_changed: Some(false),
            }),
            logging: None,
        };

        Ok(InitializeResult {
            protocol_version: MCP_VERSION.into(),
            capabilities,
            server_info: ServerInfo {
                name: self.state.config.name.to_string(),
                version: self.state.config.version.to_string(),
            },
            instructions: Some(self.instructions()),
        })
    }

    async fn initialized(&self) -> ProtocolResult<()> {
        info!("Server initialized successfully");
        Ok(())
    }

    async fn shutdown(&self) -> ProtocolResult<()> {
        info!("Shutdown request received after {} requests", self.state.request_count());
        Ok(())
    }

    async fn list_resources(&self) -> ProtocolResult<ListResourcesResult> {
        self.state.record_request();
        let resources = self.state.resources.list();
        debug!("Listing {} resources", resources.len());

        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
        })
    }

    async fn read_resource(
        &self,
        params: ReadResourceParams,
    ) -> ProtocolResult<ReadResourceResult> {
        self.state.record_request();
        debug!("Resource read: {}", params.uri);

        self.state
            .resources
            .read(&params.uri)
            .map_err(invalid_params)
    }

    async fn list_tools(&self) -> ProtocolResult<ListToolsResult> {
        self.state.record_request();
        let tools = self.state.tools.list();
        debug!("Listing {} tools", tools.len());

        Ok(ListToolsResult {
            tools,
            next_cursor: None,
        })
    }

    async fn call_tool(&self, params: CallToolParams) -> ProtocolResult<CallToolResult> {
        self.state.record_request();
        debug!("Tool call: {}", params.name);

        match self.state.tools.execute(params).await {
            Ok(result) => Ok(result),
            // Unknown tool or bad arguments are protocol-level failures
            Err(McpError::Tool(e)) => Err(invalid_params(e)),
            Err(e) => {
                tracing::error!("Tool execution error: {}", e);
                Ok(CallToolResult::error(e.to_string()))
            }
        }
    }

    async fn list_prompts(&self) -> ProtocolResult<ListPromptsResult> {
        self.state.record_request();
        let prompts = self.state.prompts.list();
        debug!("Listing {} prompts", prompts.len());

        Ok(ListPromptsResult {
            prompts,
            next_cursor: None,
        })
    }

    async fn get_prompt(&self, params: GetPromptParams) -> ProtocolResult<GetPromptResult> {
        self.state.record_request();
        debug!("Prompt get: {}", params.name);

        // Prompts have no in-band error channel; everything surfaces as
        // a JSON-RPC error
        self.state.prompts.render(params).await.map_err(|e| match e {
            McpError::Prompt(e) => invalid_params(e),
            McpError::Weather(e) => invalid_params(e),
            e => ProtocolError::InternalError(e.to_string().into()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use crate::server::state::ServerStateBuilder;
    use serde_json::json;

    fn handler() -> McpHandler {
        let state = Arc::new(
            ServerStateBuilder::new()
                .config(ServerConfig::default())
                .build()
                .unwrap(),
        );
        McpHandler::new(state)
    }

    fn initialize_params() -> InitializeParams {
        serde_json::from_value(json!({
            "protocolVersion": "2024-11-05",
            "capabilities": {},
            "clientInfo": {"name": "test-client", "version": "1.0"}
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_initialize_advertises_all_surfaces() {
        let handler = handler();
        let result = handler.initialize(initialize_params()).await.unwrap();

        assert_eq!(result.protocol_version, MCP_VERSION);
        assert!(result.capabilities.resources.is_some());
        assert!(result.capabilities.tools.is_some());
        assert!(result.capabilities.prompts.is_some());
        assert_eq!(result.server_info.name, "weather-mcp-server");

        let instructions = result.instructions.unwrap();
        assert!(instructions.contains("get_weather"));
        assert!(instructions.contains("weather://london"));
        assert!(instructions.contains("weather_comparison"));

        assert!(handler.state().is_initialized());
    }

    #[tokio::test]
    async fn test_list_resources() {
        let result = handler().list_resources().await.unwrap();
        let uris: Vec<&str> = result.resources.iter().map(|r| r.uri.as_str()).collect();
        assert_eq!(
            uris,
            vec!["weather://new_york", "weather://london", "weather://tokyo"]
        );
    }

    #[tokio::test]
    async fn test_read_unknown_resource_is_invalid_params() {
        let err = handler()
            .read_resource(ReadResourceParams {
                uri: "weather://paris".into(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code(), -32602);
    }

    #[tokio::test]
    async fn test_call_tool_known_location() {
        let result = handler()
            .call_tool(CallToolParams {
                name: "get_weather".into(),
                arguments: json!({"location": "London"}),
            })
            .await
            .unwrap();

        assert!(result.is_error.is_none());
        assert!(result.content[0].as_text().contains("London, UK"));
    }

    #[tokio::test]
    async fn test_call_tool_unknown_location_is_in_band_error() {
        let result = handler()
            .call_tool(CallToolParams {
                name: "get_weather".into(),
                arguments: json!({"location": "Atlantis"}),
            })
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(true));
    }

    #[tokio::test]
    async fn test_call_unknown_tool_is_invalid_params() {
        let err = handler()
            .call_tool(CallToolParams {
                name: "make_it_rain".into(),
                arguments: json!({}),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code(), -32602);
    }

    #[tokio::test]
    async fn test_call_tool_missing_argument_is_invalid_params() {
        let err = handler()
            .call_tool(CallToolParams {
                name: "get_weather_forecast".into(),
                arguments: json!({"days": 3}),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code(), -32602);
    }

    #[tokio::test]
    async fn test_get_prompt_comparison() {
        let result = handler()
            .get_prompt(GetPromptParams {
                name: "weather_comparison".into(),
                arguments: [
                    ("location1".to_string(), "New York".to_string()),
                    ("location2".to_string(), "Tokyo".to_string()),
                ]
                .into(),
            })
            .await
            .unwrap();

        let text = result.messages[0].content.as_text();
        assert!(text.contains("New York"));
        assert!(text.contains("Tokyo"));
    }

    #[tokio::test]
    async fn test_get_unknown_prompt_is_invalid_params() {
        let err = handler()
            .get_prompt(GetPromptParams {
                name: "weather_poem".into(),
                arguments: Default::default(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code(), -32602);
    }

    #[tokio::test]
    async fn test_requests_are_counted() {
        let handler = handler();
        handler.list_tools().await.unwrap();
        handler.list_prompts().await.unwrap();
        assert_eq!(handler.state().request_count(), 2);
    }
}
