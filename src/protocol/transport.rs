//! Stdio transport for JSON-RPC messages.
//!
//! One request per line on stdin, one response per line on stdout.
//! Logging goes to stderr so it never interleaves with the protocol.

use crate::error::{McpError, ProtocolError, Result};
use crate::protocol::types::{JsonRpcRequest, JsonRpcResponse};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Stdin, Stdout};
use tokio::sync::Mutex;
use tracing::{debug, error, trace};

/// Transport trait for MCP communication.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Read the next request. `Ok(None)` means EOF.
    async fn read_request(&self) -> Result<Option<JsonRpcRequest>>;

    /// Write a single response.
    async fn write_response(&self, response: &JsonRpcResponse) -> Result<()>;
}

/// Stdio-based transport for MCP.
pub struct StdioTransport {
    reader: Arc<Mutex<BufReader<Stdin>>>,
    writer: Arc<Mutex<Stdout>>,
}

impl StdioTransport {
    pub fn new() -> Self {
        Self {
            reader: Arc::new(Mutex::new(BufReader::new(tokio::io::stdin()))),
            writer: Arc::new(Mutex::new(tokio::io::stdout())),
        }
    }

    /// Read the next non-empty line from stdin.
    async fn read_line(&self) -> Result<Option<String>> {
        let mut reader = self.reader.lock().await;

        loop {
            let mut line = String::new();
            match reader.read_line(&mut line).await {
                Ok(0) => return Ok(None), // EOF
                Ok(_) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    trace!("Received line: {}", line);
                    return Ok(Some(line.to_string()));
                }
                Err(e) => {
                    error!("Error reading from stdin: {}", e);
                    return Err(McpError::Io(e));
                }
            }
        }
    }

    async fn write_line(&self, content: &str) -> Result<()> {
        let mut writer = self.writer.lock().await;
        trace!("Sending line: {}", content);
        writer.write_all(content.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
        Ok(())
    }
}

impl Default for StdioTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Transport for StdioTransport {
    async fn read_request(&self) -> Result<Option<JsonRpcRequest>> {
        let Some(line) = self.read_line().await? else {
            return Ok(None);
        };

        match serde_json::from_str::<JsonRpcRequest>(&line) {
            Ok(request) => {
                debug!("Received request: method={}", request.method);
                Ok(Some(request))
            }
            Err(e) => {
                error!("Failed to parse message: {}", e);
                Err(McpError::Protocol(ProtocolError::ParseError))
            }
        }
    }

    async fn write_response(&self, response: &JsonRpcResponse) -> Result<()> {
        let json = serde_json::to_string(response)?;
        debug!("Sending response: id={:?}", response.id);
        self.write_line(&json).await
    }
}

#[cfg(test)]
mod tests {
    use crate::protocol::types::{JsonRpcRequest, JsonRpcResponse, RequestId};

    #[test]
    fn test_request_parsing() {
        let json = r#"{"jsonrpc":"2.0","id":1,"method":"resources/list"}"#;
        let request: JsonRpcRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.method, "resources/list");
        assert_eq!(request.id, Some(RequestId::Number(1)));
    }

    #[test]
    fn test_notification_parsing() {
        let json = r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#;
        let request: JsonRpcRequest = serde_json::from_str(json).unwrap();
        assert!(request.is_notification());
    }

    #[test]
    fn test_garbage_is_not_a_request() {
        assert!(serde_json::from_str::<JsonRpcRequest>("{not json}").is_err());
    }

    #[test]
    fn test_response_round_trip() {
        let response = JsonRpcResponse::success(Some(7.into()), serde_json::json!({"ok": true}));
        let line = serde_json::to_string(&response).unwrap();
        let parsed: JsonRpcResponse = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed.id, Some(RequestId::Number(7)));
        assert!(parsed.result.is_some());
    }
}
