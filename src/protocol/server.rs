//! MCP server with lifecycle management.

use crate::error::{McpError, ProtocolError, Result};
use crate::protocol::handler::{Dispatcher, Handler};
use crate::protocol::transport::{StdioTransport, Transport};
use crate::protocol::types::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;
use tracing::{debug, error, info, instrument};

/// Server lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerState {
    /// Server created but not initialized.
    Created,
    /// Initialize request received, awaiting initialized notification.
    Initializing,
    /// Server is fully operational.
    Running,
    /// Shutdown requested.
    ShuttingDown,
    /// Server has stopped.
    Stopped,
}

/// MCP Server.
pub struct McpServer<H: Handler> {
    info: ServerInfo,
    capabilities: ServerCapabilities,
    handler: Arc<H>,
    state: Arc<RwLock<ServerState>>,
    running: AtomicBool,
}

impl<H: Handler> McpServer<H> {
    /// Create a new MCP server.
    pub fn new(handler: H, info: ServerInfo, capabilities: ServerCapabilities) -> Self {
        Self {
            info,
            capabilities,
            handler: Arc::new(handler),
            state: Arc::new(RwLock::new(ServerState::Created)),
            running: AtomicBool::new(false),
        }
    }

    /// Get current server state.
    pub async fn state(&self) -> ServerState {
        *self.state.read().await
    }

    /// Check if server is running.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Run the server with stdio transport.
    #[instrument(skip(self), fields(server = %self.info.name))]
    pub async fn run(self) -> Result<()> {
        let transport = Arc::new(StdioTransport::new());
        self.run_with_transport(transport).await
    }

    /// Run the server with a custom transport.
    ///
    /// Requests are processed one at a time: read, dispatch, respond.
    /// Errors answer the offending request and never stop the loop.
    pub async fn run_with_transport<T: Transport + 'static>(self, transport: Arc<T>) -> Result<()> {
        info!(
            "Starting MCP server: {} v{}",
            self.info.name, self.info.version
        );
        self.running.store(true, Ordering::SeqCst);

        let dispatcher = Dispatcher::new(Arc::clone(&self.handler));

        loop {
            if !self.running.load(Ordering::SeqCst) {
                info!("Server stopping...");
                break;
            }

            let request = match transport.read_request().await {
                Ok(Some(request)) => request,
                Ok(None) => {
                    debug!("EOF received, shutting down");
                    break;
                }
                Err(McpError::Protocol(ProtocolError::ParseError)) => {
                    let response = JsonRpcResponse::error(None, JsonRpcError::parse_error());
                    if let Err(e) = transport.write_response(&response).await {
                        error!("Failed to send error response: {}", e);
                    }
                    continue;
                }
                Err(e) => {
                    error!("Transport error: {}", e);
                    break;
                }
            };

            let is_notification = request.is_notification();
            let method = request.method.clone();

            self.update_state_for_method(&method).await;

            let response = dispatcher.dispatch(request).await;

            // Notifications get no response
            if !is_notification && let Err(e) = transport.write_response(&response).await {
                error!("Failed to send response: {}", e);
            }

            if method == "shutdown" {
                info!("Shutdown request received");
                self.running.store(false, Ordering::SeqCst);
            }
        }

        *self.state.write().await = ServerState::Stopped;
        info!("Server stopped");
        Ok(())
    }

    /// Update server state based on the method being processed.
    async fn update_state_for_method(&self, method: &str) {
        let mut state = self.state.write().await;
        match method {
            "initialize" => {
                if *state == ServerState::Created {
                    *state = ServerState::Initializing;
                }
            }
            "initialized" | "notifications/initialized" => {
                if *state == ServerState::Initializing {
                    *state = ServerState::Running;
                    info!("Server initialized and running");
                }
            }
            "shutdown" => {
                *state = ServerState::ShuttingDown;
            }
            _ => {}
        }
    }

    /// Stop the server.
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }
}

/// Builder for McpServer.
pub struct McpServerBuilder<H: Handler> {
    handler: Option<H>,
    name: String,
    version: String,
    capabilities: ServerCapabilities,
}

impl<H: Handler> McpServerBuilder<H> {
    pub fn new() -> Self {
        Self {
            handler: None,
            name: env!("CARGO_PKG_NAME").into(),
            version: env!("CARGO_PKG_VERSION").into(),
            capabilities: ServerCapabilities::default(),
        }
    }

    pub fn handler(mut self, handler: H) -> Self {
        self.handler = Some(handler);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_resources(mut self) -> Self {
        self.capabilities.resources = Some(ResourcesCapability {
            subscribe: Some(false),
            list_changed: Some(false),
        });
        self
    }

    pub fn with_tools(mut self) -> Self {
        self.capabilities.tools = Some(ToolsCapability {
            list_changed: Some(false),
        });
        self
    }

    pub fn with_prompts(mut self) -> Self {
        self.capabilities.prompts = Some(PromptsCapability {
            list_changed: Some(false),
        });
        self
    }

    pub fn build(self) -> Result<McpServer<H>> {
        let handler = self.handler.ok_or_else(|| McpError::Internal {
            message: "Handler is required".into(),
        })?;

        Ok(McpServer::new(
            handler,
            ServerInfo {
                name: self.name,
                version: self.version,
            },
            self.capabilities,
        ))
    }
}

impl<H: Handler> Default for McpServerBuilder<H> {
    fn default() -> Self {
        Self::new()
    }
}
