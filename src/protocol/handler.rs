//! Request handler and method dispatcher.

use crate::error::{ProtocolError, ProtocolResult};
use crate::protocol::types::*;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, instrument, warn};

/// Handler trait for processing MCP requests.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Handle initialize request.
    async fn initialize(&self, params: InitializeParams) -> ProtocolResult<InitializeResult>;

    /// Handle initialized notification.
    async fn initialized(&self) -> ProtocolResult<()>;

    /// Handle shutdown request.
    async fn shutdown(&self) -> ProtocolResult<()>;

    /// List available resources.
    async fn list_resources(&self) -> ProtocolResult<ListResourcesResult>;

    /// Read a resource by URI.
    async fn read_resource(&self, params: ReadResourceParams) -> ProtocolResult<ReadResourceResult>;

    /// List available tools.
    async fn list_tools(&self) -> ProtocolResult<ListToolsResult>;

    /// Call a tool.
    async fn call_tool(&self, params: CallToolParams) -> ProtocolResult<CallToolResult>;

    /// List available prompts.
    async fn list_prompts(&self) -> ProtocolResult<ListPromptsResult>;

    /// Render a prompt by name.
    async fn get_prompt(&self, params: GetPromptParams) -> ProtocolResult<GetPromptResult>;

    /// Handle ping request.
    async fn ping(&self) -> ProtocolResult<Value> {
        Ok(serde_json::json!({}))
    }
}

/// Method dispatcher that routes requests to appropriate handlers.
pub struct Dispatcher<H: Handler> {
    handler: Arc<H>,
}

impl<H: Handler> Dispatcher<H> {
    pub fn new(handler: Arc<H>) -> Self {
        Self { handler }
    }

    /// Dispatch a request to the appropriate handler method.
    #[instrument(skip(self, request), fields(method = %request.method))]
    pub async fn dispatch(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        debug!("Dispatching request: {}", request.method);

        let result = match request.method.as_str() {
            "initialize" => self.with_params(request.params, |p| self.handler.initialize(p)).await,
            "initialized" | "notifications/initialized" => {
                self.handler.initialized().await.map(|()| Value::Null)
            }
            "shutdown" => self.handler.shutdown().await.map(|()| Value::Null),
            "ping" => self.handler.ping().await,
            "resources/list" => to_value(self.handler.list_resources().await),
            "resources/read" => {
                self.with_params(request.params, |p| self.handler.read_resource(p)).await
            }
            "tools/list" => to_value(self.handler.list_tools().await),
            "tools/call" => self.with_params(request.params, |p| self.handler.call_tool(p)).await,
            "prompts/list" => to_value(self.handler.list_prompts().await),
            "prompts/get" => self.with_params(request.params, |p| self.handler.get_prompt(p)).await,
            method => {
                warn!("Unknown method: {}", method);
                Err(ProtocolError::MethodNotFound(method.to_string()))
            }
        };

        match result {
            Ok(value) => JsonRpcResponse::success(request.id, value),
            Err(e) => {
                error!("Request failed: {}", e);
                JsonRpcResponse::error(request.id, JsonRpcError::new(e.code(), e.to_string()))
            }
        }
    }

    /// Decode params, invoke the handler method, serialize the result.
    async fn with_params<P, R, Fut>(
        &self,
        params: Option<Value>,
        call: impl FnOnce(P) -> Fut,
    ) -> ProtocolResult<Value>
    where
        P: DeserializeOwned,
        R: serde::Serialize,
        Fut: Future<Output = ProtocolResult<R>>,
    {
        let params: P = params
            .map(serde_json::from_value)
            .transpose()
            .map_err(|e| ProtocolError::InvalidParams(e.to_string().into()))?
            .ok_or_else(|| ProtocolError::InvalidParams("Missing params".into()))?;

        to_value(call(params).await)
    }
}

fn to_value<R: serde::Serialize>(result: ProtocolResult<R>) -> ProtocolResult<Value> {
    let value = result?;
    serde_json::to_value(value).map_err(|e| ProtocolError::InternalError(e.to_string().into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockHandler;

    #[async_trait]
    impl Handler for MockHandler {
        async fn initialize(&self, _params: InitializeParams) -> ProtocolResult<InitializeResult> {
            Ok(InitializeResult {
                protocol_version: MCP_VERSION.into(),
                capabilities: ServerCapabilities::default(),
                server_info: ServerInfo {
                    name: "test".into(),
                    version: "1.0".into(),
                },
                instructions: None,
            })
        }

        async fn initialized(&self) -> ProtocolResult<()> {
            Ok(())
        }

        async fn shutdown(&self) -> ProtocolResult<()> {
            Ok(())
        }

        async fn list_resources(&self) -> ProtocolResult<ListResourcesResult> {
            Ok(ListResourcesResult {
                resources: vec![],
                next_cursor: None,
            })
        }

        async fn read_resource(
            &self,
            params: ReadResourceParams,
        ) -> ProtocolResult<ReadResourceResult> {
            Err(ProtocolError::InvalidParams(
                format!("Unknown resource URI: {}", params.uri).into(),
            ))
        }

        async fn list_tools(&self) -> ProtocolResult<ListToolsResult> {
            Ok(ListToolsResult {
                tools: vec![],
                next_cursor: None,
            })
        }

        async fn call_tool(&self, _params: CallToolParams) -> ProtocolResult<CallToolResult> {
            Ok(CallToolResult::text("test"))
        }

        async fn list_prompts(&self) -> ProtocolResult<ListPromptsResult> {
            Ok(ListPromptsResult {
                prompts: vec![],
                next_cursor: None,
            })
        }

        async fn get_prompt(&self, _params: GetPromptParams) -> ProtocolResult<GetPromptResult> {
            Ok(GetPromptResult {
                description: None,
                messages: vec![PromptMessage::user("test")],
            })
        }
    }

    fn dispatcher() -> Dispatcher<MockHandler> {
        Dispatcher::new(Arc::new(MockHandler))
    }

    #[tokio::test]
    async fn test_dispatch_initialize() {
        let request = JsonRpcRequest::new("initialize")
            .with_id(1)
            .with_params(serde_json::json!({
                "protocolVersion": "2024-11-05",
                "capabilities": {},
                "clientInfo": {
                    "name": "test-client",
                    "version": "1.0"
                }
            }));

        let response = dispatcher().dispatch(request).await;
        assert!(response.result.is_some());
        assert!(response.error.is_none());
    }

    #[tokio::test]
    async fn test_dispatch_unknown_method() {
        let request = JsonRpcRequest::new("unknown/method").with_id(1);
        let response = dispatcher().dispatch(request).await;

        assert!(response.result.is_none());
        assert_eq!(response.error.unwrap().code, -32601);
    }

    #[tokio::test]
    async fn test_dispatch_missing_params() {
        let request = JsonRpcRequest::new("resources/read").with_id(2);
        let response = dispatcher().dispatch(request).await;

        assert_eq!(response.error.unwrap().code, -32602);
    }

    #[tokio::test]
    async fn test_dispatch_list_methods_without_params() {
        for method in ["resources/list", "tools/list", "prompts/list"] {
            let response = dispatcher().dispatch(JsonRpcRequest::new(method).with_id(3)).await;
            assert!(response.result.is_some(), "{method} should succeed");
        }
    }

    #[tokio::test]
    async fn test_dispatch_ping() {
        let response = dispatcher().dispatch(JsonRpcRequest::new("ping").with_id(4)).await;
        assert_eq!(response.result.unwrap(), serde_json::json!({}));
    }
}
