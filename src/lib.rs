//! Demonstration MCP server serving mock weather data.
//!
//! Exposes three capability surfaces over JSON-RPC 2.0 on stdio:
//! `weather://` resources, the `get_weather` / `get_weather_forecast`
//! tools, and the `weather_report` / `weather_comparison` prompts. All
//! data is a fixed in-memory table; nothing is fetched or persisted.
//!
//! # Example
//!
//! ```no_run
//! use weather_mcp_server::{
//!     config::ServerConfig,
//!     protocol::McpServerBuilder,
//!     server::{McpHandler, ServerStateBuilder},
//! };
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::builder().from_env().build()?;
//!
//!     let state = Arc::new(
//!         ServerStateBuilder::new()
//!             .config(config)
//!             .build()
//!             .map_err(|e| anyhow::anyhow!(e))?,
//!     );
//!
//!     let handler = McpHandler::new(state);
//!     let server = McpServerBuilder::new()
//!         .handler(handler)
//!         .with_resources()
//!         .with_tools()
//!         .with_prompts()
//!         .build()?;
//!
//!     server.run().await?;
//!     Ok(())
//! }
//! ```

#![allow(dead_code, reason = "Some fields reserved for future use")]

pub mod config;
pub mod error;
pub mod prompts;
pub mod protocol;
pub mod resources;
pub mod server;
pub mod tools;
pub mod weather;

pub use config::{ServerConfig, ServerConfigBuilder};
pub use error::{McpError, Result};
pub use prompts::{PromptHandler, PromptRegistry};
pub use protocol::{McpServer, McpServerBuilder};
pub use resources::WeatherResources;
pub use server::{McpHandler, ServerState, ServerStateBuilder};
pub use tools::{ToolHandler, ToolRegistry};
pub use weather::{WeatherRecord, WeatherStore};
