mod server;
mod telemetry;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use rmcp::transport::stdio;
use rmcp::ServiceExt;
use tracing::info;
use trustwise_core::{ApiVersion, ToolRegistry, TrustwiseClient, TrustwiseConfig};

use crate::server::TrustwiseServer;
use crate::telemetry::LogFormat;

#[derive(Debug, Parser)]
#[command(
	name = "trustwise-mcp",
	version,
	about = "Serve Trustwise evaluation metrics as MCP tools over stdio"
)]
struct Cli {
	/// Trustwise API key
	#[arg(long, env = "TW_API_KEY", hide_env_values = true)]
	api_key: Option<String>,

	/// Override the Trustwise API base URL
	#[arg(long, env = "TW_BASE_URL")]
	base_url: Option<String>,

	/// Metrics API shape to register tools for (v3 or v4)
	#[arg(long, env = "TW_API_VERSION", default_value = "v3")]
	api_version: ApiVersion,

	/// Log output format (logs are written to stderr)
	#[arg(long, env = "TW_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
	log_format: LogFormat,
}

impl Cli {
	fn config(&self) -> TrustwiseConfig {
		TrustwiseConfig {
			api_key: self.api_key.clone(),
			base_url: self.base_url.clone(),
			api_version: self.api_version,
		}
	}
}

#[tokio::main]
async fn main() -> Result<()> {
	// .env is optional
	let _ = dotenvy::dotenv();
	let cli = Cli::parse();
	telemetry::init(cli.log_format);

	let config = cli.config();
	let client = TrustwiseClient::new(&config).context("failed to construct Trustwise client")?;
	let registry = ToolRegistry::new(Arc::new(client), config.api_version);
	info!(
		api_version = %registry.version(),
		tools = registry.tools().len(),
		"starting Trustwise MCP server on stdio"
	);

	let service = TrustwiseServer::new(registry)
		.serve(stdio())
		.await
		.context("MCP handshake failed")?;
	let reason = service.waiting().await?;
	info!(?reason, "Trustwise MCP server stopped");
	Ok(())
}
