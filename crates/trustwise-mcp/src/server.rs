use rmcp::model::{
	CallToolRequestParam, CallToolResult, Content, ErrorData, Implementation, ListToolsResult,
	PaginatedRequestParam, ServerCapabilities, ServerInfo, Tool,
};
use rmcp::service::{RequestContext, RoleServer};
use rmcp::ServerHandler;
use tracing::{debug, warn};
use trustwise_core::{JsonObject, ToolRegistry, TrustwiseError};

/// MCP front end over a [`ToolRegistry`].
#[derive(Debug, Clone)]
pub struct TrustwiseServer {
	registry: ToolRegistry,
}

impl TrustwiseServer {
	pub fn new(registry: ToolRegistry) -> Self {
		Self { registry }
	}

	pub fn tool_list(&self) -> Vec<Tool> {
		self.registry
			.tools()
			.iter()
			.map(|t| Tool::new(t.name(), t.description(), t.input_schema()))
			.collect()
	}

	/// Unknown tools are a protocol error; every failure of a known tool is
	/// reported to the caller as a failed tool result carrying the message.
	pub async fn dispatch(&self, name: &str, arguments: Option<JsonObject>) -> Result<CallToolResult, ErrorData> {
		match self.registry.call(name, arguments.unwrap_or_default()).await {
			Ok(value) => {
				debug!(tool = name, "tool call succeeded");
				Ok(CallToolResult::structured(value))
			}
			Err(TrustwiseError::UnknownTool(name)) => {
				Err(ErrorData::invalid_params(format!("unknown tool: {name}"), None))
			}
			Err(err) => {
				warn!(tool = name, error = %err, "tool call failed");
				Ok(CallToolResult::error(vec![Content::text(err.to_string())]))
			}
		}
	}
}

impl ServerHandler for TrustwiseServer {
	fn get_info(&self) -> ServerInfo {
		ServerInfo {
			capabilities: ServerCapabilities::builder().enable_tools().build(),
			server_info: Implementation {
				name: "trustwise-mcp".into(),
				version: env!("CARGO_PKG_VERSION").into(),
				..Implementation::from_build_env()
			},
			instructions: Some(format!(
				"Trustwise evaluation metrics ({} API). Each tool forwards its arguments to the \
				 Trustwise service and returns the scored result unchanged.",
				self.registry.version()
			)),
			..Default::default()
		}
	}

	async fn list_tools(
		&self,
		_request: Option<PaginatedRequestParam>,
		_context: RequestContext<RoleServer>,
	) -> Result<ListToolsResult, ErrorData> {
		Ok(ListToolsResult::with_all_items(self.tool_list()))
	}

	async fn call_tool(
		&self,
		request: CallToolRequestParam,
		_context: RequestContext<RoleServer>,
	) -> Result<CallToolResult, ErrorData> {
		self.dispatch(&request.name, request.arguments).await
	}
}
