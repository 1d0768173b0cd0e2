//! MCP server binary entry point.

use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt};
use weather_mcp_server::{
    config::ServerConfig,
    protocol::McpServerBuilder,
    server::{McpHandler, ServerStateBuilder},
};

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional; real environment variables win
    dotenv::dotenv().ok();

    let config = ServerConfig::builder().from_env().build()?;
    init_tracing(&config.log_level);

    info!("Starting {} v{}", config.name, config.version);
    if config.has_custom_api_key() {
        debug!("Using API key from WEATHER_API_KEY");
    } else {
        debug!("No WEATHER_API_KEY set, using demo key (mock data only)");
    }

    let name = config.name.clone();
    let version = config.version.clone();

    let state = Arc::new(
        ServerStateBuilder::new()
            .config(config)
            .build()
            .map_err(|e| anyhow::anyhow!(e))?,
    );

    info!(
        "Server state initialized: {} resources, {} tools, {} prompts",
        state.resources.list().len(),
        state.tools.len(),
        state.prompts.len()
    );

    let handler = McpHandler::new(state);
    let server = McpServerBuilder::new()
        .handler(handler)
        .name(name.to_string())
        .version(version.to_string())
        .with_resources()
        .with_tools()
        .with_prompts()
        .build()?;

    info!("MCP server ready, waiting for requests...");

    server.run().await?;

    info!("Server shutdown complete");
    Ok(())
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("weather_mcp_server={log_level},warn")));

    // Structured JSON logs go to stderr; stdout carries the MCP protocol
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .json()
        .init();
}
