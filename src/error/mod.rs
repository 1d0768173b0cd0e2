//! Error types for the weather MCP server.
//!
//! Uses `thiserror` for ergonomic error definitions with automatic `From` conversions.

use std::borrow::Cow;
use thiserror::Error;

/// Main error type for the weather MCP server.
#[derive(Debug, Error)]
pub enum McpError {
    #[error("Protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    #[error("Weather error: {0}")]
    Weather(#[from] WeatherError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    #[error("Prompt error: {0}")]
    Prompt(#[from] PromptError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {message}")]
    Internal { message: Cow<'static, str> },
}

/// JSON-RPC 2.0 and MCP protocol errors.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("Parse error: invalid JSON")]
    ParseError,

    #[error("Invalid request: {0}")]
    InvalidRequest(Cow<'static, str>),

    #[error("Method not found: {0}")]
    MethodNotFound(String),

    #[error("Invalid params: {0}")]
    InvalidParams(Cow<'static, str>),

    #[error("Internal error: {0}")]
    InternalError(Cow<'static, str>),

    #[error("Server not initialized")]
    NotInitialized,

    #[error("Transport error: {0}")]
    Transport(Cow<'static, str>),
}

impl ProtocolError {
    /// Returns the JSON-RPC 2.0 error code.
    pub fn code(&self) -> i32 {
        match self {
            Self::ParseError => -32700,
            Self::InvalidRequest(_) => -32600,
            Self::MethodNotFound(_) => -32601,
            Self::InvalidParams(_) => -32602,
            Self::InternalError(_) => -32603,
            Self::NotInitialized => -32002,
            Self::Transport(_) => -32000,
        }
    }
}

/// Errors from the mock weather table.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Unknown location: '{0}'. Known locations: new_york, london, tokyo")]
    LocationNotFound(String),

    #[error("Unknown resource URI: {0}")]
    InvalidUri(String),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required field: {0}")]
    MissingField(Cow<'static, str>),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue {
        field: Cow<'static, str>,
        message: Cow<'static, str>,
    },
}

/// Tool invocation errors.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    NotFound(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

/// Prompt rendering errors.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("Unknown prompt: {0}")]
    NotFound(String),

    #[error("Missing required argument: {0}")]
    MissingArgument(Cow<'static, str>),
}

/// Result type alias for McpError.
pub type Result<T> = std::result::Result<T, McpError>;

/// Result type alias for ProtocolError.
pub type ProtocolResult<T> = std::result::Result<T, ProtocolError>;

/// Result type alias for WeatherError.
pub type WeatherResult<T> = std::result::Result<T, WeatherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_error_codes() {
        assert_eq!(ProtocolError::ParseError.code(), -32700);
        assert_eq!(ProtocolError::InvalidRequest("test".into()).code(), -32600);
        assert_eq!(ProtocolError::MethodNotFound("test".into()).code(), -32601);
        assert_eq!(ProtocolError::InvalidParams("test".into()).code(), -32602);
        assert_eq!(ProtocolError::InternalError("test".into()).code(), -32603);
    }

    #[test]
    fn test_error_conversion() {
        let weather_error = WeatherError::LocationNotFound("atlantis".into());
        let mcp_error: McpError = weather_error.into();
        assert!(matches!(mcp_error, McpError::Weather(_)));
    }

    #[test]
    fn test_location_not_found_names_known_locations() {
        let message = WeatherError::LocationNotFound("atlantis".into()).to_string();
        assert!(message.contains("atlantis"));
        assert!(message.contains("new_york"));
    }
}
